pub mod contact;
pub mod header;
pub mod icons;
