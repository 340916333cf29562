//! Periodic table layout
//!
//! Rows 0-6 are the main 7x18 table with gaps where the f-block is pulled
//! out; rows 7-8 hold the lanthanides (57-71) and actinides (89-103).

pub const ROWS: usize = 9;
pub const COLUMNS: usize = 18;

/// First row of the detached f-block
pub const F_BLOCK_ROW: usize = 7;

/// Atomic number per cell, 0 for empty cells
#[rustfmt::skip]
const LAYOUT: [[u8; COLUMNS]; ROWS] = [
    [1,  0,  0,  0,   0,   0,   0,   0,   0,   0,   0,   0,   0,   0,   0,   0,   0,   2  ],
    [3,  4,  0,  0,   0,   0,   0,   0,   0,   0,   0,   0,   5,   6,   7,   8,   9,   10 ],
    [11, 12, 0,  0,   0,   0,   0,   0,   0,   0,   0,   0,   13,  14,  15,  16,  17,  18 ],
    [19, 20, 21, 22,  23,  24,  25,  26,  27,  28,  29,  30,  31,  32,  33,  34,  35,  36 ],
    [37, 38, 39, 40,  41,  42,  43,  44,  45,  46,  47,  48,  49,  50,  51,  52,  53,  54 ],
    [55, 56, 0,  72,  73,  74,  75,  76,  77,  78,  79,  80,  81,  82,  83,  84,  85,  86 ],
    [87, 88, 0,  104, 105, 106, 107, 108, 109, 110, 111, 112, 113, 114, 115, 116, 117, 118],
    [0,  0,  57, 58,  59,  60,  61,  62,  63,  64,  65,  66,  67,  68,  69,  70,  71,  0  ],
    [0,  0,  89, 90,  91,  92,  93,  94,  95,  96,  97,  98,  99,  100, 101, 102, 103, 0  ],
];

/// Atomic number shown at `(row, column)`, if the cell is populated
pub fn atomic_number_at(row: usize, column: usize) -> Option<u8> {
    LAYOUT
        .get(row)
        .and_then(|cells| cells.get(column))
        .copied()
        .filter(|&z| z != 0)
}

/// Grid cell of an element
pub fn position_of(atomic_number: u8) -> Option<(usize, usize)> {
    if atomic_number == 0 {
        return None;
    }
    LAYOUT.iter().enumerate().find_map(|(row, cells)| {
        cells
            .iter()
            .position(|&z| z == atomic_number)
            .map(|column| (row, column))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::elements::MAX_ATOMIC_NUMBER;

    #[test]
    fn every_element_appears_once() {
        let mut seen = [0u32; MAX_ATOMIC_NUMBER as usize + 1];
        for row in 0..ROWS {
            for column in 0..COLUMNS {
                if let Some(z) = atomic_number_at(row, column) {
                    seen[usize::from(z)] += 1;
                }
            }
        }
        assert_eq!(seen[0], 0);
        assert!(seen[1..].iter().all(|&count| count == 1));
    }

    #[test]
    fn lookups_agree() {
        assert_eq!(position_of(1), Some((0, 0)));
        assert_eq!(position_of(2), Some((0, 17)));
        assert_eq!(position_of(90), Some((8, 3)));
        assert_eq!(atomic_number_at(5, 2), None);
        assert_eq!(atomic_number_at(9, 0), None);
        assert_eq!(position_of(0), None);
        assert_eq!(position_of(119), None);

        for z in 1..=MAX_ATOMIC_NUMBER {
            let (row, column) = position_of(z).unwrap();
            assert_eq!(atomic_number_at(row, column), Some(z));
        }
    }

    #[test]
    fn f_block_is_detached() {
        assert_eq!(position_of(57).map(|(row, _)| row), Some(F_BLOCK_ROW));
        assert_eq!(position_of(103).map(|(row, _)| row), Some(F_BLOCK_ROW + 1));
    }
}
