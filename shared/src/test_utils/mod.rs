pub mod fixtures;
pub mod mock_rental_store;
pub mod test_logging;
