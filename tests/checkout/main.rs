#[path = "../common/mod.rs"]
mod common;

mod checkout_file_from_commit;
mod reset_to_commit;
