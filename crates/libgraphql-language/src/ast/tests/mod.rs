mod definition_tests;
mod document_tests;
mod node_tests;
mod operation_definition_tests;
mod value_tests;
