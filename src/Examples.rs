/// Worked examples of parsing chemical notation: formulas, charged species
/// names and reaction equations. Choose an example by its task number.
pub mod parsing_examples;
