pub mod command;
pub mod db_data;
pub mod query;
