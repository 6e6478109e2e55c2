pub mod hyundai;
pub mod layout;
pub mod samsung;
pub mod traits;

pub mod prelude {
    pub use super::hyundai::HyundaiAdapter;
    pub use super::layout::{ColumnMap, HeaderLayout};
    pub use super::samsung::SamsungAdapter;
    pub use super::traits::BankAdapter;
}
