use log::info;

pub fn parsing_examples(task: usize) {
    //

    match task {
        0 => {
            // ATOMIC COMPOSITION OF FORMULAS
            use crate::Parsing::formula_parser::parse_formula;
            let formulae = vec![
                "H2O",
                "CaMg(CO3)2",
                "CaCl2*10H2O",
                "Na2SO4*(NH4)2SO4*4H2O",
                "NaCl(aq)",
            ];
            for formula in formulae {
                let composition = parse_formula(formula).unwrap();
                println!("formula {} -> {:?}", formula, composition);
            }
        }
        1 => {
            // ELECTRIC CHARGE OF SPECIES NAMES
            use crate::Parsing::charge_parser::parse_electric_charge;
            let species = vec!["Fe+++", "Fe[3+]", "CO3-2", "Na+", "Cl-", "e-", "H2O"];
            for name in species {
                let charge = parse_electric_charge(name);
                println!("species {} has charge {}", name, charge);
            }
        }
        2 => {
            // REACTION EQUATIONS
            use crate::Parsing::reaction_parser::{
                parse_number_string_pairs, parse_reaction_equation,
            };
            let terms = parse_reaction_equation("CaCO3 + 2*H+ = Ca++ + CO2 + H2O").unwrap();
            println!("reaction terms: {:?}", terms);

            let pairs = parse_number_string_pairs("1:Na 2:Cl 1:Na").unwrap();
            println!("accumulated pairs: {:?}", pairs);
        }
        3 => {
            // MATRIX OF ELEMENTAL COMPOSITION
            use crate::Parsing::composition_analyzer::CompositionAnalyzer;
            let formulas = vec!["H2O", "NaCl", "C3H8", "CH4"]; // 5 elements
            let mut analyzer = CompositionAnalyzer::new();
            analyzer.set_formulas(formulas.iter().map(|s| s.to_string()).collect());
            analyzer.parse_all().unwrap();
            analyzer.create_matrix_of_elements();
            analyzer.pretty_print_compositions();
            info!("elements found: {:?}", analyzer.elements);
            println!("{}", analyzer.composition_matrix.unwrap());
        }
        _ => {
            println!("no example with task number {}", task);
        }
    }
}
