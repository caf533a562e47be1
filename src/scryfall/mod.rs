pub mod card_info;
