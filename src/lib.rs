pub mod config;
pub mod entry;
pub mod entry_parser;
pub mod error;
pub mod fixups;
pub mod glyph;
pub mod markup;
pub mod output;
pub mod pipeline;
pub mod stress;
pub mod symbol_grammar;
pub mod utility;
pub mod vocabulary;
