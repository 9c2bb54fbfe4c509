mod graphql_parser_tests;
mod graphql_token_stream_tests;
pub(crate) mod utils;
