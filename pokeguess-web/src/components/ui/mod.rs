pub mod congratulations_modal;
