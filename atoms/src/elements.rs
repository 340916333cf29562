//! Static periodic table data
//!
//! Every element carries the same record: symbol, name, atomic mass, standard
//! state and bonding type. Measured masses keep their parenthetical
//! uncertainty (`"12.0107(8)"`); synthetic elements carry the mass number of
//! their longest-lived isotope instead.

use std::fmt;

use crate::error::AtomError;

/// Highest atomic number in the table
pub const MAX_ATOMIC_NUMBER: u8 = 118;

/// Atomic mass as published, either measured with uncertainty or a bare number
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AtomicMass {
    Measured(&'static str),
    MassNumber(f64),
}

impl AtomicMass {
    /// Numeric value of the mass, ignoring any uncertainty suffix
    pub fn value(&self) -> Option<f64> {
        match *self {
            AtomicMass::Measured(text) => parse_mass(text),
            AtomicMass::MassNumber(value) => Some(value),
        }
    }
}

impl fmt::Display for AtomicMass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AtomicMass::Measured(text) => f.write_str(text),
            AtomicMass::MassNumber(value) => write!(f, "[{value}]"),
        }
    }
}

/// Parse the numeric prefix of a mass string, e.g. `"12.011(1)"` -> `12.011`
pub fn parse_mass(text: &str) -> Option<f64> {
    let prefix = text.split('(').next()?.trim();
    prefix.parse::<f64>().ok().filter(|mass| mass.is_finite())
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StandardState {
    Solid,
    Liquid,
    Gas,
    Unknown,
}

impl fmt::Display for StandardState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            StandardState::Solid => "solid",
            StandardState::Liquid => "liquid",
            StandardState::Gas => "gas",
            StandardState::Unknown => "unknown",
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BondingType {
    Diatomic,
    Atomic,
    Metallic,
    CovalentNetwork,
    Unknown,
}

impl fmt::Display for BondingType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            BondingType::Diatomic => "diatomic",
            BondingType::Atomic => "atomic",
            BondingType::Metallic => "metallic",
            BondingType::CovalentNetwork => "covalent network",
            BondingType::Unknown => "unknown",
        })
    }
}

/// One row of the periodic table
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Element {
    pub atomic_number: u8,
    pub symbol: &'static str,
    pub name: &'static str,
    pub atomic_mass: AtomicMass,
    pub standard_state: StandardState,
    pub bonding_type: BondingType,
}

/// Number of each particle type in a neutral atom of an element
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ParticleCounts {
    pub protons: u32,
    pub neutrons: u32,
    pub electrons: u32,
}

impl ParticleCounts {
    /// Derive counts for a neutral atom: Z protons and electrons,
    /// `round(mass - Z)` neutrons.
    pub fn for_element(element: &Element) -> Result<Self, AtomError> {
        let mass = element
            .atomic_mass
            .value()
            .ok_or_else(|| AtomError::MalformedMass {
                symbol: element.symbol,
                mass: element.atomic_mass.to_string(),
            })?;

        let protons = u32::from(element.atomic_number);
        let neutrons = (mass - f64::from(protons)).round();
        if neutrons < 0.0 {
            return Err(AtomError::NegativeNeutrons {
                symbol: element.symbol,
            });
        }

        Ok(Self {
            protons,
            neutrons: neutrons as u32,
            electrons: protons,
        })
    }

    pub fn nucleons(&self) -> u32 {
        self.protons + self.neutrons
    }
}

/// Look up an element by atomic number
pub fn element(atomic_number: u8) -> Result<&'static Element, AtomError> {
    atomic_number
        .checked_sub(1)
        .and_then(|index| ELEMENTS.get(usize::from(index)))
        .ok_or(AtomError::UnknownElement(atomic_number))
}

/// All elements, ordered by atomic number
pub fn all() -> &'static [Element] {
    &ELEMENTS
}

const fn el(
    atomic_number: u8,
    symbol: &'static str,
    name: &'static str,
    atomic_mass: AtomicMass,
    standard_state: StandardState,
    bonding_type: BondingType,
) -> Element {
    Element {
        atomic_number,
        symbol,
        name,
        atomic_mass,
        standard_state,
        bonding_type,
    }
}

static ELEMENTS: [Element; MAX_ATOMIC_NUMBER as usize] = [
    el(1, "H", "Hydrogen", AtomicMass::Measured("1.00794(4)"), StandardState::Gas, BondingType::Diatomic),
    el(2, "He", "Helium", AtomicMass::Measured("4.002602(2)"), StandardState::Gas, BondingType::Atomic),
    el(3, "Li", "Lithium", AtomicMass::Measured("6.941(2)"), StandardState::Solid, BondingType::Metallic),
    el(4, "Be", "Beryllium", AtomicMass::Measured("9.012182(3)"), StandardState::Solid, BondingType::Metallic),
    el(5, "B", "Boron", AtomicMass::Measured("10.811(7)"), StandardState::Solid, BondingType::CovalentNetwork),
    el(6, "C", "Carbon", AtomicMass::Measured("12.0107(8)"), StandardState::Solid, BondingType::CovalentNetwork),
    el(7, "N", "Nitrogen", AtomicMass::Measured("14.0067(2)"), StandardState::Gas, BondingType::Diatomic),
    el(8, "O", "Oxygen", AtomicMass::Measured("15.9994(3)"), StandardState::Gas, BondingType::Diatomic),
    el(9, "F", "Fluorine", AtomicMass::Measured("18.9984032(5)"), StandardState::Gas, BondingType::Diatomic),
    el(10, "Ne", "Neon", AtomicMass::Measured("20.1797(6)"), StandardState::Gas, BondingType::Atomic),
    el(11, "Na", "Sodium", AtomicMass::Measured("22.98976928(2)"), StandardState::Solid, BondingType::Metallic),
    el(12, "Mg", "Magnesium", AtomicMass::Measured("24.3050(6)"), StandardState::Solid, BondingType::Metallic),
    el(13, "Al", "Aluminum", AtomicMass::Measured("26.9815386(8)"), StandardState::Solid, BondingType::Metallic),
    el(14, "Si", "Silicon", AtomicMass::Measured("28.0855(3)"), StandardState::Solid, BondingType::CovalentNetwork),
    el(15, "P", "Phosphorus", AtomicMass::Measured("30.973762(2)"), StandardState::Solid, BondingType::CovalentNetwork),
    el(16, "S", "Sulfur", AtomicMass::Measured("32.065(5)"), StandardState::Solid, BondingType::CovalentNetwork),
    el(17, "Cl", "Chlorine", AtomicMass::Measured("35.453(2)"), StandardState::Gas, BondingType::Diatomic),
    el(18, "Ar", "Argon", AtomicMass::Measured("39.948(1)"), StandardState::Gas, BondingType::Atomic),
    el(19, "K", "Potassium", AtomicMass::Measured("39.0983(1)"), StandardState::Solid, BondingType::Metallic),
    el(20, "Ca", "Calcium", AtomicMass::Measured("40.078(4)"), StandardState::Solid, BondingType::Metallic),
    el(21, "Sc", "Scandium", AtomicMass::Measured("44.955912(6)"), StandardState::Solid, BondingType::Metallic),
    el(22, "Ti", "Titanium", AtomicMass::Measured("47.867(1)"), StandardState::Solid, BondingType::Metallic),
    el(23, "V", "Vanadium", AtomicMass::Measured("50.9415(1)"), StandardState::Solid, BondingType::Metallic),
    el(24, "Cr", "Chromium", AtomicMass::Measured("51.9961(6)"), StandardState::Solid, BondingType::Metallic),
    el(25, "Mn", "Manganese", AtomicMass::Measured("54.938045(5)"), StandardState::Solid, BondingType::Metallic),
    el(26, "Fe", "Iron", AtomicMass::Measured("55.845(2)"), StandardState::Solid, BondingType::Metallic),
    el(27, "Co", "Cobalt", AtomicMass::Measured("58.933195(5)"), StandardState::Solid, BondingType::Metallic),
    el(28, "Ni", "Nickel", AtomicMass::Measured("58.6934(4)"), StandardState::Solid, BondingType::Metallic),
    el(29, "Cu", "Copper", AtomicMass::Measured("63.546(3)"), StandardState::Solid, BondingType::Metallic),
    el(30, "Zn", "Zinc", AtomicMass::Measured("65.38(2)"), StandardState::Solid, BondingType::Metallic),
    el(31, "Ga", "Gallium", AtomicMass::Measured("69.723(1)"), StandardState::Solid, BondingType::Metallic),
    el(32, "Ge", "Germanium", AtomicMass::Measured("72.64(1)"), StandardState::Solid, BondingType::Metallic),
    el(33, "As", "Arsenic", AtomicMass::Measured("74.92160(2)"), StandardState::Solid, BondingType::Metallic),
    el(34, "Se", "Selenium", AtomicMass::Measured("78.96(3)"), StandardState::Solid, BondingType::Metallic),
    el(35, "Br", "Bromine", AtomicMass::Measured("79.904(1)"), StandardState::Liquid, BondingType::Diatomic),
    el(36, "Kr", "Krypton", AtomicMass::Measured("83.798(2)"), StandardState::Gas, BondingType::Atomic),
    el(37, "Rb", "Rubidium", AtomicMass::Measured("85.4678(3)"), StandardState::Solid, BondingType::Metallic),
    el(38, "Sr", "Strontium", AtomicMass::Measured("87.62(1)"), StandardState::Solid, BondingType::Metallic),
    el(39, "Y", "Yttrium", AtomicMass::Measured("88.90585(2)"), StandardState::Solid, BondingType::Metallic),
    el(40, "Zr", "Zirconium", AtomicMass::Measured("91.224(2)"), StandardState::Solid, BondingType::Metallic),
    el(41, "Nb", "Niobium", AtomicMass::Measured("92.90638(2)"), StandardState::Solid, BondingType::Metallic),
    el(42, "Mo", "Molybdenum", AtomicMass::Measured("95.96(2)"), StandardState::Solid, BondingType::Metallic),
    el(43, "Tc", "Technetium", AtomicMass::MassNumber(98.0), StandardState::Solid, BondingType::Metallic),
    el(44, "Ru", "Ruthenium", AtomicMass::Measured("101.07(2)"), StandardState::Solid, BondingType::Metallic),
    el(45, "Rh", "Rhodium", AtomicMass::Measured("102.90550(2)"), StandardState::Solid, BondingType::Metallic),
    el(46, "Pd", "Palladium", AtomicMass::Measured("106.42(1)"), StandardState::Solid, BondingType::Metallic),
    el(47, "Ag", "Silver", AtomicMass::Measured("107.8682(2)"), StandardState::Solid, BondingType::Metallic),
    el(48, "Cd", "Cadmium", AtomicMass::Measured("112.411(8)"), StandardState::Solid, BondingType::Metallic),
    el(49, "In", "Indium", AtomicMass::Measured("114.818(3)"), StandardState::Solid, BondingType::Metallic),
    el(50, "Sn", "Tin", AtomicMass::Measured("118.710(7)"), StandardState::Solid, BondingType::Metallic),
    el(51, "Sb", "Antimony", AtomicMass::Measured("121.760(1)"), StandardState::Solid, BondingType::Metallic),
    el(52, "Te", "Tellurium", AtomicMass::Measured("127.60(3)"), StandardState::Solid, BondingType::Metallic),
    el(53, "I", "Iodine", AtomicMass::Measured("126.90447(3)"), StandardState::Solid, BondingType::Diatomic),
    el(54, "Xe", "Xenon", AtomicMass::Measured("131.293(6)"), StandardState::Gas, BondingType::Atomic),
    el(55, "Cs", "Cesium", AtomicMass::Measured("132.9054519(2)"), StandardState::Solid, BondingType::Metallic),
    el(56, "Ba", "Barium", AtomicMass::Measured("137.327(7)"), StandardState::Solid, BondingType::Metallic),
    el(57, "La", "Lanthanum", AtomicMass::Measured("138.90547(7)"), StandardState::Solid, BondingType::Metallic),
    el(58, "Ce", "Cerium", AtomicMass::Measured("140.116(1)"), StandardState::Solid, BondingType::Metallic),
    el(59, "Pr", "Praseodymium", AtomicMass::Measured("140.90765(2)"), StandardState::Solid, BondingType::Metallic),
    el(60, "Nd", "Neodymium", AtomicMass::Measured("144.242(3)"), StandardState::Solid, BondingType::Metallic),
    el(61, "Pm", "Promethium", AtomicMass::MassNumber(145.0), StandardState::Solid, BondingType::Metallic),
    el(62, "Sm", "Samarium", AtomicMass::Measured("150.36(2)"), StandardState::Solid, BondingType::Metallic),
    el(63, "Eu", "Europium", AtomicMass::Measured("151.964(1)"), StandardState::Solid, BondingType::Metallic),
    el(64, "Gd", "Gadolinium", AtomicMass::Measured("157.25(3)"), StandardState::Solid, BondingType::Metallic),
    el(65, "Tb", "Terbium", AtomicMass::Measured("158.92535(2)"), StandardState::Solid, BondingType::Metallic),
    el(66, "Dy", "Dysprosium", AtomicMass::Measured("162.500(1)"), StandardState::Solid, BondingType::Metallic),
    el(67, "Ho", "Holmium", AtomicMass::Measured("164.93032(2)"), StandardState::Solid, BondingType::Metallic),
    el(68, "Er", "Erbium", AtomicMass::Measured("167.259(3)"), StandardState::Solid, BondingType::Metallic),
    el(69, "Tm", "Thulium", AtomicMass::Measured("168.93421(2)"), StandardState::Solid, BondingType::Metallic),
    el(70, "Yb", "Ytterbium", AtomicMass::Measured("173.054(5)"), StandardState::Solid, BondingType::Metallic),
    el(71, "Lu", "Lutetium", AtomicMass::Measured("174.9668(1)"), StandardState::Solid, BondingType::Metallic),
    el(72, "Hf", "Hafnium", AtomicMass::Measured("178.49(2)"), StandardState::Solid, BondingType::Metallic),
    el(73, "Ta", "Tantalum", AtomicMass::Measured("180.94788(2)"), StandardState::Solid, BondingType::Metallic),
    el(74, "W", "Tungsten", AtomicMass::Measured("183.84(1)"), StandardState::Solid, BondingType::Metallic),
    el(75, "Re", "Rhenium", AtomicMass::Measured("186.207(1)"), StandardState::Solid, BondingType::Metallic),
    el(76, "Os", "Osmium", AtomicMass::Measured("190.23(3)"), StandardState::Solid, BondingType::Metallic),
    el(77, "Ir", "Iridium", AtomicMass::Measured("192.217(3)"), StandardState::Solid, BondingType::Metallic),
    el(78, "Pt", "Platinum", AtomicMass::Measured("195.084(9)"), StandardState::Solid, BondingType::Metallic),
    el(79, "Au", "Gold", AtomicMass::Measured("196.966569(4)"), StandardState::Solid, BondingType::Metallic),
    el(80, "Hg", "Mercury", AtomicMass::Measured("200.59(2)"), StandardState::Liquid, BondingType::Metallic),
    el(81, "Tl", "Thallium", AtomicMass::Measured("204.3833(2)"), StandardState::Solid, BondingType::Metallic),
    el(82, "Pb", "Lead", AtomicMass::Measured("207.2(1)"), StandardState::Solid, BondingType::Metallic),
    el(83, "Bi", "Bismuth", AtomicMass::Measured("208.98040(1)"), StandardState::Solid, BondingType::Metallic),
    el(84, "Po", "Polonium", AtomicMass::MassNumber(209.0), StandardState::Solid, BondingType::Metallic),
    el(85, "At", "Astatine", AtomicMass::MassNumber(210.0), StandardState::Solid, BondingType::CovalentNetwork),
    el(86, "Rn", "Radon", AtomicMass::MassNumber(222.0), StandardState::Gas, BondingType::Atomic),
    el(87, "Fr", "Francium", AtomicMass::MassNumber(223.0), StandardState::Solid, BondingType::Metallic),
    el(88, "Ra", "Radium", AtomicMass::MassNumber(226.0), StandardState::Solid, BondingType::Metallic),
    el(89, "Ac", "Actinium", AtomicMass::MassNumber(227.0), StandardState::Solid, BondingType::Metallic),
    el(90, "Th", "Thorium", AtomicMass::Measured("232.03806(2)"), StandardState::Solid, BondingType::Metallic),
    el(91, "Pa", "Protactinium", AtomicMass::Measured("231.03588(2)"), StandardState::Solid, BondingType::Metallic),
    el(92, "U", "Uranium", AtomicMass::Measured("238.02891(3)"), StandardState::Solid, BondingType::Metallic),
    el(93, "Np", "Neptunium", AtomicMass::MassNumber(237.0), StandardState::Solid, BondingType::Metallic),
    el(94, "Pu", "Plutonium", AtomicMass::MassNumber(244.0), StandardState::Solid, BondingType::Metallic),
    el(95, "Am", "Americium", AtomicMass::MassNumber(243.0), StandardState::Solid, BondingType::Metallic),
    el(96, "Cm", "Curium", AtomicMass::MassNumber(247.0), StandardState::Solid, BondingType::Metallic),
    el(97, "Bk", "Berkelium", AtomicMass::MassNumber(247.0), StandardState::Solid, BondingType::Metallic),
    el(98, "Cf", "Californium", AtomicMass::MassNumber(251.0), StandardState::Solid, BondingType::Metallic),
    el(99, "Es", "Einsteinium", AtomicMass::MassNumber(252.0), StandardState::Solid, BondingType::Unknown),
    el(100, "Fm", "Fermium", AtomicMass::MassNumber(257.0), StandardState::Unknown, BondingType::Unknown),
    el(101, "Md", "Mendelevium", AtomicMass::MassNumber(258.0), StandardState::Unknown, BondingType::Unknown),
    el(102, "No", "Nobelium", AtomicMass::MassNumber(259.0), StandardState::Unknown, BondingType::Unknown),
    el(103, "Lr", "Lawrencium", AtomicMass::MassNumber(262.0), StandardState::Unknown, BondingType::Unknown),
    el(104, "Rf", "Rutherfordium", AtomicMass::MassNumber(267.0), StandardState::Unknown, BondingType::Unknown),
    el(105, "Db", "Dubnium", AtomicMass::MassNumber(268.0), StandardState::Unknown, BondingType::Unknown),
    el(106, "Sg", "Seaborgium", AtomicMass::MassNumber(271.0), StandardState::Unknown, BondingType::Unknown),
    el(107, "Bh", "Bohrium", AtomicMass::MassNumber(272.0), StandardState::Unknown, BondingType::Unknown),
    el(108, "Hs", "Hassium", AtomicMass::MassNumber(270.0), StandardState::Unknown, BondingType::Unknown),
    el(109, "Mt", "Meitnerium", AtomicMass::MassNumber(276.0), StandardState::Unknown, BondingType::Unknown),
    el(110, "Ds", "Darmstadtium", AtomicMass::MassNumber(281.0), StandardState::Unknown, BondingType::Unknown),
    el(111, "Rg", "Roentgenium", AtomicMass::MassNumber(280.0), StandardState::Unknown, BondingType::Unknown),
    el(112, "Cn", "Copernicium", AtomicMass::MassNumber(285.0), StandardState::Unknown, BondingType::Unknown),
    el(113, "Nh", "Nihonium", AtomicMass::MassNumber(284.0), StandardState::Unknown, BondingType::Unknown),
    el(114, "Fl", "Flerovium", AtomicMass::MassNumber(289.0), StandardState::Unknown, BondingType::Unknown),
    el(115, "Mc", "Moscovium", AtomicMass::MassNumber(288.0), StandardState::Unknown, BondingType::Unknown),
    el(116, "Lv", "Livermorium", AtomicMass::MassNumber(293.0), StandardState::Unknown, BondingType::Unknown),
    el(117, "Ts", "Tennessine", AtomicMass::MassNumber(294.0), StandardState::Unknown, BondingType::Unknown),
    el(118, "Og", "Oganesson", AtomicMass::MassNumber(294.0), StandardState::Unknown, BondingType::Unknown),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_mass_prefix() {
        assert_eq!(parse_mass("12.011(1)"), Some(12.011));
        assert_eq!(parse_mass("1.008"), Some(1.008));
        assert_eq!(parse_mass("not a mass"), None);
        assert_eq!(parse_mass(""), None);
    }

    #[test]
    fn bare_mass_number_is_returned_unchanged() {
        assert_eq!(AtomicMass::MassNumber(294.0).value(), Some(294.0));
    }

    #[test]
    fn table_is_ordered_by_atomic_number() {
        for (index, element) in all().iter().enumerate() {
            assert_eq!(usize::from(element.atomic_number), index + 1, "{}", element.symbol);
        }
    }

    #[test]
    fn counts_for_every_element() {
        for z in 1..=MAX_ATOMIC_NUMBER {
            let element = element(z).unwrap();
            let counts = ParticleCounts::for_element(element).unwrap();
            let mass = element.atomic_mass.value().unwrap();

            assert_eq!(counts.protons, u32::from(z));
            assert_eq!(counts.electrons, u32::from(z));
            assert_eq!(f64::from(counts.neutrons), (mass - f64::from(z)).round());
        }
    }

    #[test]
    fn oxygen_and_thorium_counts() {
        let oxygen = ParticleCounts::for_element(element(8).unwrap()).unwrap();
        assert_eq!(oxygen, ParticleCounts { protons: 8, neutrons: 8, electrons: 8 });

        let thorium = ParticleCounts::for_element(element(90).unwrap()).unwrap();
        assert_eq!(thorium.neutrons, 142);
        assert_eq!(thorium.nucleons(), 232);
    }

    #[test]
    fn unknown_atomic_numbers_are_rejected() {
        assert!(matches!(element(0), Err(AtomError::UnknownElement(0))));
        assert!(matches!(element(119), Err(AtomError::UnknownElement(119))));
    }

    #[test]
    fn malformed_and_negative_masses_are_errors() {
        let mut broken = *element(6).unwrap();
        broken.atomic_mass = AtomicMass::Measured("(12)");
        assert!(matches!(
            ParticleCounts::for_element(&broken),
            Err(AtomError::MalformedMass { symbol: "C", .. })
        ));

        broken.atomic_mass = AtomicMass::MassNumber(2.0);
        assert!(matches!(
            ParticleCounts::for_element(&broken),
            Err(AtomError::NegativeNeutrons { symbol: "C" })
        ));
    }
}
