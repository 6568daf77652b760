//! The fixed column layout of the roster sheet.
//!
//! Each slot names one template placeholder and the spreadsheet column that
//! feeds it. The roster template is maintained by hand, so this table is the
//! single place to update when a column moves.

/// Placeholder filled with the sheet name
pub const LIST_NAME_KEY: &str = "listname";

/// Placeholder filled with the category cell
pub const CATEGORY_KEY: &str = "categoryname";

/// One template placeholder fed by one spreadsheet column
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Slot {
    pub name: &'static str,
    pub column: &'static str,
}

impl Slot {
    pub const fn new(name: &'static str, column: &'static str) -> Self {
        Self { name, column }
    }
}

/// Every column-backed placeholder, grouped as on the sheet
pub const SLOTS: &[Slot] = &[
    // Ships
    Slot::new("shipgeneral", "AU"),
    Slot::new("shipcorvette", "BC"),
    Slot::new("shipdestroyer", "BD"),
    Slot::new("shipcruiser", "BE"),
    Slot::new("shipbattleship", "BF"),
    Slot::new("shiptitan", "BG"),
    Slot::new("shipcolossus", "BH"),
    Slot::new("shipjuggernaut", "BI"),
    Slot::new("shipscience", "AY"),
    Slot::new("shipcolonizer", "AZ"),
    Slot::new("shipconstructor", "AX"),
    Slot::new("shiptransport", "BL"),
    Slot::new("shipstarbase", "BN"),
    Slot::new("shipioncannon", "BM"),
    // Fleets
    Slot::new("fleetgeneral", "BS"),
    // Armies
    Slot::new("armygeneral", "BV"),
    Slot::new("armydefense", "BW"),
    Slot::new("armyassault", "BX"),
    Slot::new("armyslave", "BY"),
    Slot::new("armyundead", "BZ"),
    Slot::new("armyclone", "CA"),
    Slot::new("armymachinedefence", "CB"),
    Slot::new("armyrobotic", "CC"),
    Slot::new("armyroboticdefense", "CD"),
    Slot::new("armypsionic", "CE"),
    Slot::new("armyxenomorph", "CF"),
    Slot::new("armygenewarrior", "CG"),
    Slot::new("armyoccupation", "CH"),
    Slot::new("armyindividualmachineoccupation", "CI"),
    Slot::new("armyroboticoccupation", "CJ"),
    Slot::new("armyprimitive", "CK"),
    Slot::new("armyindustrial", "CL"),
    Slot::new("armypostatomic", "CM"),
    Slot::new("armymachineassault1", "CN"),
    Slot::new("armymachineassault2", "CO"),
    Slot::new("armymachineassault3", "CP"),
    Slot::new("armywarpling", "CQ"),
    // Planets
    Slot::new("planetgeneral", "CU"),
    Slot::new("planetdesert", "CV"),
    Slot::new("planetarid", "CW"),
    Slot::new("planetsavannah", "CX"),
    Slot::new("planetocean", "CY"),
    Slot::new("planetcontinental", "CZ"),
    Slot::new("planettropical", "DA"),
    Slot::new("planetarctic", "DB"),
    Slot::new("planetalpine", "DC"),
    Slot::new("planettundra", "DD"),
    // Characters
    Slot::new("characterfullgeneral", "T"),
    Slot::new("characterfullfemale", "U"),
    Slot::new("characterfullmale", "V"),
    Slot::new("characterfirstgeneral", "X"),
    Slot::new("characterfirstfemale", "Y"),
    Slot::new("characterfirstmale", "Z"),
    Slot::new("charactersecondgeneral", "AB"),
    Slot::new("charactersecondfemale", "AC"),
    Slot::new("charactersecondmale", "AD"),
    Slot::new("characterregnalfullgeneral", "AG"),
    Slot::new("characterregnalfullfemale", "AH"),
    Slot::new("characterregnalfullmale", "AI"),
    Slot::new("characterregnalfirstgeneral", "AK"),
    Slot::new("characterregnalfirstfemale", "AL"),
    Slot::new("characterregnalfirstmale", "AM"),
    Slot::new("characterregnalsecondgeneral", "AO"),
    Slot::new("characterregnalsecondfemale", "AP"),
    Slot::new("characterregnalsecondmale", "AQ"),
];

/// All keys the renderer supplies: every slot plus list and category name
pub fn required_keys() -> Vec<&'static str> {
    let mut keys = vec![LIST_NAME_KEY, CATEGORY_KEY];
    keys.extend(SLOTS.iter().map(|slot| slot.name));
    keys
}
