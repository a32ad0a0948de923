/// Module to parse a chemical formula into its atomic composition. The formula
/// is decomposed into a map {element symbol: number of atoms}, the number of atoms
/// may be fractional (hydrates, solid solutions). Parenthesized groups, numeric
/// multipliers and hydrate separators * and : are understood, aggregate state
/// marks like (aq) or (cr) terminate the scan.
///
///  # Examples
/// ```
/// use ChemNotation::Parsing::formula_parser::parse_formula;
/// let composition = parse_formula("Ca(OH)2").unwrap();
/// println!("{:?}", composition);
/// assert_eq!(composition.get("O"), Some(&2.0));
/// let composition = parse_formula("CaCl2*10H2O").unwrap();
/// assert_eq!(composition.get("H"), Some(&20.0));
/// ```
pub mod formula_parser;
/// Module to extract the electric charge encoded in a species name. Three
/// historical notations are understood and tried in a fixed order: repeated
/// trailing signs (Fe+++), number and sign between brackets (Fe[3+]) and
/// sign followed by a number (CO3-2).
///
///  # Examples
/// ```
/// use ChemNotation::Parsing::charge_parser::parse_electric_charge;
/// assert_eq!(parse_electric_charge("Fe+++"), 3.0);
/// assert_eq!(parse_electric_charge("SO4--"), -2.0);
/// assert_eq!(parse_electric_charge("H2O"), 0.0);
/// ```
pub mod charge_parser;
/// Module to split reaction records into pairs of species names and
/// stoichiometric coefficients. Two notations are supported: lists of
/// coefficient:species tokens and reaction equations like
/// "2*H2 + O2 = 2*H2O" where reactant coefficients come out negative
/// and product coefficients positive.
///
///  # Examples
/// ```
/// use ChemNotation::Parsing::reaction_parser::parse_reaction_equation;
/// let terms = parse_reaction_equation("2*H2 + O2 = 2*H2O").unwrap();
/// assert_eq!(terms[0], ("H2".to_string(), -2.0));
/// assert_eq!(terms[2], ("H2O".to_string(), 2.0));
/// ```
pub mod reaction_parser;
/// Module for batch processing of species names: collects composition and
/// charge of every species into structs, builds the matrix of elemental
/// composition (species in rows, elements in columns), prints composition
/// tables and saves parsed data to json files.
///
///  # Examples
/// ```
/// use ChemNotation::Parsing::composition_analyzer::CompositionAnalyzer;
/// let mut analyzer = CompositionAnalyzer::new();
/// analyzer.set_formulas(vec!["H2O".to_string(), "NaCl".to_string()]);
/// analyzer.parse_all().unwrap();
/// analyzer.create_matrix_of_elements();
/// println!("{:?}", analyzer.elements);
/// ```
pub mod composition_analyzer;
