pub mod engine;
pub mod protocol;
pub mod session;

pub mod download;
pub mod keyword_parser;
pub mod llm_client;
pub mod prompt_builder;

#[cfg(test)]
pub mod testing;
