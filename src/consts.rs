pub(crate) const N_CELLS: usize = 81;
pub(crate) const N_HOUSE_CELLS: u8 = 9;
