mod field_definition_tests;
mod input_object_tests;
mod type_annotation_tests;
