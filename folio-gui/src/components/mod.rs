pub mod profile_form;
pub mod profile_tab;
