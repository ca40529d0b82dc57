/// Formatter adapters rendering catalog content as display text
mod plain_text_formatter;

pub use plain_text_formatter::PlainTextFormatter;
