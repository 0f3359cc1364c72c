use zaliznyak_dict::stress::{
    convert_stress_marks_to_numbers, encode_stress, strip_stress_marks, word_stress_code,
};

#[test]
fn test_convert_stress_marks_to_numbers() {
    let cases = [
        ("кот", "кот 0"),
        ("рыба́к", "рыбак 2"),
        ("учёба", "учеба 0,3"),
        ("бельё", "белье 0,1"),
        ("Кзы́л-Орда́", "Кзыл-Орда 2+1"),
        ("Золота́я Орда́", "Золотая Орда 2+1"),
        ("Москва́-река́", "Москва-река 1+1"),
        ("ну́-ка", "ну-ка 1+0"),
        ("флё̀рдора́нж", "флердоранж 3,8.3"),
        ("пти́чка-невели́чка", "птичка-невеличка 4+4"),
        ("д’Артанья́н", "д’Артаньян 2"),
        ("Д’Анну́нцио", "Д’Аннунцио 5"),
        ("Эль Гре́ко", "Эль Греко 0+3"),
        ("Э́льба", "Эльба 5"),
        ("и́на́че", "иначе 3//5"),
    ];

    for (lemma, expected) in cases {
        assert_eq!(convert_stress_marks_to_numbers(lemma), expected, "{}", lemma);
    }
}

#[test]
fn test_word_stress_code() {
    assert_eq!(word_stress_code("кот"), "0");
    assert_eq!(word_stress_code("ко́т"), "2");
    assert_eq!(word_stress_code("ё"), "0,1");
}

#[test]
fn test_encode_stress_parts() {
    let encoded = encode_stress("Москва́-река́");
    assert_eq!(encoded.stripped, "Москва-река");
    assert_eq!(encoded.code, "1+1");
}

#[test]
fn test_strip_stress_marks() {
    assert_eq!(strip_stress_marks("флё̀рдора́нж"), "флердоранж");
    assert_eq!(strip_stress_marks("Ёлка"), "Елка");
}
