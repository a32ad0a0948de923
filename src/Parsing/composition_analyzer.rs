use crate::Parsing::charge_parser::parse_electric_charge;
use crate::Parsing::formula_parser::{FormulaParseError, parse_formula};
use indexmap::IndexMap;
use log::{info, warn};
use nalgebra::DMatrix;
use prettytable::{Cell, Row, Table};
use serde::{Deserialize, Serialize};
use serde_json::json;
use std::fs::File;
use std::io::Write;

/// Everything the parsers can extract from one species name: the name itself,
/// the atomic composition and the electric charge.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct SpeciesData {
    pub name: String,
    pub composition: IndexMap<String, f64>,
    pub charge: f64,
}

impl SpeciesData {
    /// parse a species name like "CO3-2(aq)" into composition and charge
    pub fn from_name(name: &str) -> Result<Self, FormulaParseError> {
        let composition = parse_formula(name)?;
        let charge = parse_electric_charge(name);
        Ok(Self {
            name: name.to_string(),
            composition,
            charge,
        })
    }

    /// prints the composition of the species as a table to stdout
    pub fn pretty_print(&self) {
        let mut table = Table::new();
        table.add_row(Row::new(vec![Cell::new("element"), Cell::new("atoms")]));
        for (element, amount) in self.composition.iter() {
            table.add_row(Row::new(vec![
                Cell::new(element),
                Cell::new(&amount.to_string()),
            ]));
        }
        table.add_row(Row::new(vec![
            Cell::new("charge"),
            Cell::new(&self.charge.to_string()),
        ]));
        println!("species: {}", self.name);
        table.printstd();
    }
}

/// The struct collects parsed data of a vector of species and produces the
/// matrix of elemental composition: species in rows, elements in columns,
/// atom counts in the entries. Element columns follow the order in which
/// elements are first met while walking the species list, so the layout is
/// reproducible from run to run.
#[derive(Debug, Clone, Default)]
pub struct CompositionAnalyzer {
    pub formulas: Vec<String>,                    // species names chosen by the user
    pub species: Vec<SpeciesData>,                // parsed data of every species
    pub elements: Vec<String>,                    // unique element symbols, first-encounter order
    pub composition_matrix: Option<DMatrix<f64>>, // species x elements matrix of atom counts
}

impl CompositionAnalyzer {
    pub fn new() -> Self {
        Self {
            formulas: Vec::new(),
            species: Vec::new(),
            elements: Vec::new(),
            composition_matrix: None,
        }
    }

    /////////////////////////////////SETTING SPECIES///////////////////////////////////////////

    pub fn set_formulas(&mut self, formulas: Vec<String>) {
        self.formulas = formulas;
    }

    /// parse every species name into composition and charge; the whole batch
    /// fails on the first name the grammar rejects
    pub fn parse_all(&mut self) -> Result<(), FormulaParseError> {
        if self.formulas.is_empty() {
            warn!("CompositionAnalyzer::parse_all: no formulas given");
            return Ok(());
        }
        info!("parsing {} species names", self.formulas.len());
        self.species.clear();
        self.elements.clear();
        for formula in self.formulas.iter() {
            let data = SpeciesData::from_name(formula)?;
            for element in data.composition.keys() {
                if !self.elements.contains(element) {
                    self.elements.push(element.clone());
                }
            }
            self.species.push(data);
        }
        Ok(())
    }

    /// build the matrix of elemental composition from the parsed species
    pub fn create_matrix_of_elements(&mut self) {
        if self.species.is_empty() {
            warn!("CompositionAnalyzer::create_matrix_of_elements: no parsed species, call parse_all first");
            return;
        }
        let num_rows = self.species.len();
        let num_cols = self.elements.len();
        let mut matrix = DMatrix::zeros(num_rows, num_cols);
        for (i, data) in self.species.iter().enumerate() {
            for (j, element) in self.elements.iter().enumerate() {
                if let Some(&amount) = data.composition.get(element) {
                    matrix[(i, j)] = amount;
                }
            }
        }
        self.composition_matrix = Some(matrix);
    }

    ///////////////////////////INPUT/OUTPUT/////////////////////////////////////////////////////////

    /// prints the composition of every parsed species as one table to stdout
    pub fn pretty_print_compositions(&self) {
        let mut table = Table::new();
        let mut header = vec![Cell::new("species"), Cell::new("charge")];
        header.extend(self.elements.iter().map(|element| Cell::new(element)));
        table.add_row(Row::new(header));

        for data in self.species.iter() {
            let mut row = vec![
                Cell::new(&data.name),
                Cell::new(&data.charge.to_string()),
            ];
            for element in self.elements.iter() {
                let amount = data.composition.get(element).copied().unwrap_or(0.0);
                row.push(Cell::new(&amount.to_string()));
            }
            table.add_row(Row::new(row));
        }
        table.printstd();
    }

    /// writes the parsed species data to a json file
    pub fn save_to_json(&self, file_name: &str) -> Result<(), std::io::Error> {
        let json_array = json!(self.species);
        let mut file = File::create(file_name)?;
        file.write_all(serde_json::to_string_pretty(&json_array)?.as_bytes())?;
        info!("parsed species data have been written to {}", file_name);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use std::fs;
    use tempfile::NamedTempFile;

    #[test]
    fn test_species_data_from_name() {
        let data = SpeciesData::from_name("CO3-2(aq)").unwrap();
        assert_eq!(data.name, "CO3-2(aq)");
        assert_eq!(data.charge, -2.0);
        assert_eq!(
            data.composition.clone().into_iter().collect::<Vec<_>>(),
            vec![("C".to_string(), 1.0), ("O".to_string(), 3.0)]
        );

        let data = SpeciesData::from_name("H2O").unwrap();
        assert_eq!(data.charge, 0.0);
        assert_eq!(data.composition.get("H"), Some(&2.0));
    }

    #[test]
    fn test_composition_matrix() {
        let mut analyzer = CompositionAnalyzer::new();
        analyzer.set_formulas(vec![
            "H2O".to_string(),
            "NaCl".to_string(),
            "C3H8".to_string(),
            "CH4".to_string(),
        ]);
        analyzer.parse_all().unwrap();
        analyzer.create_matrix_of_elements();

        // 5 unique elements in first-encounter order
        assert_eq!(analyzer.elements, vec!["H", "O", "Na", "Cl", "C"]);

        let matrix = analyzer.composition_matrix.as_ref().unwrap();
        assert_eq!(matrix.nrows(), 4);
        assert_eq!(matrix.ncols(), 5);
        // H2O row
        assert_relative_eq!(matrix[(0, 0)], 2.0);
        assert_relative_eq!(matrix[(0, 1)], 1.0);
        assert_relative_eq!(matrix[(0, 4)], 0.0);
        // C3H8 row
        assert_relative_eq!(matrix[(2, 0)], 8.0);
        assert_relative_eq!(matrix[(2, 4)], 3.0);
    }

    #[test]
    fn test_parse_all_fails_on_bad_formula() {
        let mut analyzer = CompositionAnalyzer::new();
        analyzer.set_formulas(vec!["H2O".to_string(), "Na Cl".to_string()]);
        assert!(analyzer.parse_all().is_err());
    }

    #[test]
    fn test_save_to_json() {
        let mut analyzer = CompositionAnalyzer::new();
        analyzer.set_formulas(vec!["H2O".to_string(), "Na+".to_string()]);
        analyzer.parse_all().unwrap();

        let file = NamedTempFile::new().unwrap();
        let path = file.path().to_str().unwrap().to_string();
        analyzer.save_to_json(&path).unwrap();

        let contents = fs::read_to_string(&path).unwrap();
        let parsed: Vec<SpeciesData> = serde_json::from_str(&contents).unwrap();
        assert_eq!(parsed, analyzer.species);
        assert_eq!(parsed[1].charge, 1.0);
    }
}
