use soroban_sdk::contracterror;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum MathError {
    // intermediate value left the 256-bit domain or the result does not fit the output type
    NumberOverflow = 510,
}
