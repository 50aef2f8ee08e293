pub mod battery_form;
pub mod result_card;
pub mod status_indicator;
