pub mod a001_material_return;
pub mod a002_transporter_payment;
pub mod common;
