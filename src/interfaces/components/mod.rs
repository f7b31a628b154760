pub mod car_form_panel;
pub mod card;
pub mod charts;
