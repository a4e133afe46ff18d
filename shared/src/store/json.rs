use async_trait::async_trait;
use log::{debug, error, info};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tokio::fs;
use tokio::io::AsyncWriteExt;
use tokio::sync::Mutex;

use crate::error::{Result, StoreError};
use crate::models::{Booking, Car};

const CARS_FILE: &str = "cars.json";
const BOOKINGS_FILE: &str = "bookings.json";
const EMPTY_COLLECTION: &[u8] = b"[]";

// JsonFileStore

/// Flat-file store keeping each collection as a JSON array under one directory.
///
/// Every mutation rewrites the whole collection, which is fine for a small
/// fleet but does not scale with booking volume.
pub struct JsonFileStore {
    data_path: PathBuf,
    cars_file: PathBuf,
    bookings_file: PathBuf,
    // Serializes read-modify-write cycles on bookings.json within this process
    write_lock: Mutex<()>,
}

impl JsonFileStore {
    /// Opens the store at `data_path`, creating the directory and empty
    /// collections if they are missing. Existing files are left untouched.
    pub async fn new(data_path: impl Into<PathBuf>) -> Result<Self> {
        let data_path = data_path.into();
        let store = Self {
            cars_file: data_path.join(CARS_FILE),
            bookings_file: data_path.join(BOOKINGS_FILE),
            data_path,
            write_lock: Mutex::new(()),
        };
        store.setup_files().await?;
        Ok(store)
    }

    pub fn data_path(&self) -> &Path {
        &self.data_path
    }

    pub fn cars_file(&self) -> &Path {
        &self.cars_file
    }

    pub fn bookings_file(&self) -> &Path {
        &self.bookings_file
    }

    async fn setup_files(&self) -> Result<()> {
        fs::create_dir_all(&self.data_path)
            .await
            .map_err(|e| StoreError::io(&self.data_path, e))?;

        for file in [&self.cars_file, &self.bookings_file] {
            create_if_missing(file).await?;
        }

        debug!("Data directory ready at {}", self.data_path.display());
        Ok(())
    }

    async fn load_cars(&self) -> Result<Vec<Car>> {
        let cars: Vec<Car> = read_collection(&self.cars_file).await?;
        cars.iter().try_for_each(Car::validate)?;
        Ok(cars)
    }

    async fn load_bookings(&self) -> Result<Vec<Booking>> {
        let bookings: Vec<Booking> = read_collection(&self.bookings_file).await?;
        bookings.iter().try_for_each(Booking::validate)?;
        Ok(bookings)
    }

    async fn try_append_booking(&self, booking: &Booking) -> Result<()> {
        booking.validate()?;

        let _guard = self.write_lock.lock().await;

        let mut bookings = self.load_bookings().await?;
        bookings.push(booking.clone());
        write_collection(&self.bookings_file, &bookings).await
    }
}

#[async_trait]
impl super::RentalStore for JsonFileStore {
    async fn list_cars(&self) -> Vec<Car> {
        match self.load_cars().await {
            Ok(cars) => cars,
            Err(err) => {
                error!("Could not load cars: {}", err);
                Vec::new()
            }
        }
    }

    async fn list_bookings(&self) -> Vec<Booking> {
        match self.load_bookings().await {
            Ok(bookings) => bookings,
            Err(err) => {
                error!("Could not load bookings: {}", err);
                Vec::new()
            }
        }
    }

    async fn append_booking(&self, booking: &Booking) -> bool {
        match self.try_append_booking(booking).await {
            Ok(()) => {
                info!("Created booking {} for car {}", booking.id, booking.car_id);
                true
            }
            Err(err) => {
                error!("Could not create booking {}: {}", booking.id, err);
                false
            }
        }
    }
}

async fn create_if_missing(path: &Path) -> Result<()> {
    let opened = fs::OpenOptions::new()
        .write(true)
        .create_new(true)
        .open(path)
        .await;

    match opened {
        Ok(mut file) => {
            file.write_all(EMPTY_COLLECTION)
                .await
                .map_err(|e| StoreError::io(path, e))?;
            file.flush().await.map_err(|e| StoreError::io(path, e))?;
            info!("Created empty collection {}", path.display());
            Ok(())
        }
        Err(err) if err.kind() == ErrorKind::AlreadyExists => Ok(()),
        Err(err) => Err(StoreError::io(path, err)),
    }
}

async fn read_collection<T: DeserializeOwned>(path: &Path) -> Result<Vec<T>> {
    let bytes = fs::read(path).await.map_err(|e| StoreError::io(path, e))?;
    Ok(serde_json::from_slice(&bytes)?)
}

/// Writes to a sibling temp file and renames it over `path`, so readers see
/// either the old collection or the new one.
async fn write_collection<T: Serialize>(path: &Path, records: &[T]) -> Result<()> {
    let bytes = serde_json::to_vec_pretty(records)?;
    let tmp_path = path.with_extension("json.tmp");

    fs::write(&tmp_path, &bytes)
        .await
        .map_err(|e| StoreError::io(&tmp_path, e))?;

    if let Err(err) = fs::rename(&tmp_path, path).await {
        let _ = fs::remove_file(&tmp_path).await;
        return Err(StoreError::io(path, err));
    }

    debug!("Wrote {} records to {}", records.len(), path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::RentalStore;
    use crate::test_utils::fixtures::{sample_booking, sample_car};
    use chrono::NaiveDate;
    use tempfile::TempDir;

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[tokio::test]
    async fn creates_missing_directory_and_empty_collections() {
        let temp_dir = TempDir::new().unwrap();
        let data_path = temp_dir.path().join("nested").join("data");

        let store = JsonFileStore::new(&data_path).await.unwrap();

        assert!(store.cars_file().exists());
        assert!(store.bookings_file().exists());
        assert_eq!(std::fs::read(store.cars_file()).unwrap(), b"[]");
        assert!(store.list_cars().await.is_empty());
        assert!(store.list_bookings().await.is_empty());
    }

    #[tokio::test]
    async fn setup_does_not_overwrite_existing_data() {
        let temp_dir = TempDir::new().unwrap();
        let cars = vec![sample_car("car_001", 450.0, true)];
        std::fs::write(
            temp_dir.path().join(CARS_FILE),
            serde_json::to_vec(&cars).unwrap(),
        )
        .unwrap();

        let store = JsonFileStore::new(temp_dir.path()).await.unwrap();

        assert_eq!(store.list_cars().await, cars);
    }

    #[tokio::test]
    async fn unparsable_collection_reads_as_empty() {
        let temp_dir = TempDir::new().unwrap();
        let store = JsonFileStore::new(temp_dir.path()).await.unwrap();
        std::fs::write(store.cars_file(), b"{ not json").unwrap();
        std::fs::write(store.bookings_file(), b"[{\"id\": 1}]").unwrap();

        assert!(store.list_cars().await.is_empty());
        assert!(store.list_bookings().await.is_empty());
    }

    #[tokio::test]
    async fn invalid_record_empties_the_whole_collection() {
        let temp_dir = TempDir::new().unwrap();
        let store = JsonFileStore::new(temp_dir.path()).await.unwrap();
        let mut vintage = sample_car("car_002", 120.0, true);
        vintage.year = 1850;
        let cars = vec![sample_car("car_001", 450.0, true), vintage];
        std::fs::write(store.cars_file(), serde_json::to_vec(&cars).unwrap()).unwrap();

        assert!(store.list_cars().await.is_empty());
    }

    #[tokio::test]
    async fn missing_file_reads_as_empty() {
        let temp_dir = TempDir::new().unwrap();
        let store = JsonFileStore::new(temp_dir.path()).await.unwrap();
        std::fs::remove_file(store.bookings_file()).unwrap();

        assert!(store.list_bookings().await.is_empty());
    }

    #[tokio::test]
    async fn appended_booking_round_trips() {
        let temp_dir = TempDir::new().unwrap();
        let store = JsonFileStore::new(temp_dir.path()).await.unwrap();
        let first = sample_booking("BOOKING-1", "car_001", day(2025, 12, 1), day(2025, 12, 4));
        let second = sample_booking("BOOKING-2", "car_002", day(2025, 12, 5), day(2025, 12, 6));

        assert!(store.append_booking(&first).await);
        assert!(store.append_booking(&second).await);

        let bookings = store.list_bookings().await;
        assert_eq!(bookings, vec![first, second]);
        assert!(!temp_dir.path().join("bookings.json.tmp").exists());
    }

    #[tokio::test]
    async fn reads_are_idempotent() {
        let temp_dir = TempDir::new().unwrap();
        let store = JsonFileStore::new(temp_dir.path()).await.unwrap();
        let cars = vec![
            sample_car("car_001", 450.0, true),
            sample_car("car_002", 380.0, false),
        ];
        std::fs::write(store.cars_file(), serde_json::to_vec(&cars).unwrap()).unwrap();
        let booking = sample_booking("BOOKING-1", "car_001", day(2025, 12, 1), day(2025, 12, 4));
        assert!(store.append_booking(&booking).await);

        assert_eq!(store.list_cars().await, store.list_cars().await);
        assert_eq!(store.list_bookings().await, store.list_bookings().await);
    }

    #[tokio::test]
    async fn append_fails_softly_when_collection_is_corrupt() {
        let temp_dir = TempDir::new().unwrap();
        let store = JsonFileStore::new(temp_dir.path()).await.unwrap();
        std::fs::write(store.bookings_file(), b"garbage").unwrap();
        let booking = sample_booking("BOOKING-1", "car_001", day(2025, 12, 1), day(2025, 12, 4));

        assert!(!store.append_booking(&booking).await);
        // The corrupt file is left as it was
        assert_eq!(std::fs::read(store.bookings_file()).unwrap(), b"garbage");
    }

    #[tokio::test]
    async fn bookings_are_written_with_camel_case_fields() {
        let temp_dir = TempDir::new().unwrap();
        let store = JsonFileStore::new(temp_dir.path()).await.unwrap();
        let booking = sample_booking("BOOKING-1", "car_001", day(2025, 12, 1), day(2025, 12, 4));
        assert!(store.append_booking(&booking).await);

        let raw: serde_json::Value =
            serde_json::from_slice(&std::fs::read(store.bookings_file()).unwrap()).unwrap();
        let record = &raw[0];
        assert_eq!(record["carId"], "car_001");
        assert_eq!(record["startDate"], "2025-12-01T00:00:00");
        assert_eq!(record["endDate"], "2025-12-04T00:00:00");
        assert_eq!(record["status"], "confirmed");
        assert!(record.get("totalPrice").is_some());
        assert!(record.get("createdAt").is_some());
    }

    #[tokio::test]
    async fn reads_snake_case_records_and_tolerates_other_statuses() {
        let temp_dir = TempDir::new().unwrap();
        let store = JsonFileStore::new(temp_dir.path()).await.unwrap();
        let raw = serde_json::json!([{
            "id": "BOOKING-legacy",
            "car_id": "car_001",
            "customer_name": "Ton Vila",
            "customer_email": "ton@vila.com",
            "start_date": "2025-12-01T00:00:00",
            "end_date": "2025-12-03T00:00:00",
            "status": "cancelled",
            "total_price": 900.0
        }]);
        std::fs::write(store.bookings_file(), serde_json::to_vec(&raw).unwrap()).unwrap();

        let bookings = store.list_bookings().await;
        assert_eq!(bookings.len(), 1);
        assert_eq!(bookings[0].car_id, "car_001");
        assert_eq!(bookings[0].status, "cancelled");
        assert!(!bookings[0].is_confirmed());
    }

    #[tokio::test]
    async fn append_rejects_invalid_record_and_keeps_file() {
        let temp_dir = TempDir::new().unwrap();
        let store = JsonFileStore::new(temp_dir.path()).await.unwrap();
        let kept = sample_booking("BOOKING-1", "car_001", day(2025, 12, 1), day(2025, 12, 4));
        assert!(store.append_booking(&kept).await);
        let before = std::fs::read(store.bookings_file()).unwrap();

        let mut nameless = sample_booking("BOOKING-2", "car_001", day(2025, 12, 10), day(2025, 12, 12));
        nameless.customer_name = String::new();

        assert!(!store.append_booking(&nameless).await);
        assert_eq!(std::fs::read(store.bookings_file()).unwrap(), before);
        assert_eq!(store.list_bookings().await, vec![kept]);
    }

    #[tokio::test]
    async fn reads_files_with_space_separated_timestamps() {
        let temp_dir = TempDir::new().unwrap();
        let store = JsonFileStore::new(temp_dir.path()).await.unwrap();
        let cars = serde_json::json!([{
            "id": "car_001",
            "brand": "Porsche",
            "model": "GT3",
            "year": 2023,
            "daily_price": 450.0,
            "available": true,
            "plate": "ABC123",
            "color": "White",
            "kilometers": 1000,
            "created_at": "2024-01-15T10:30:00"
        }]);
        let bookings = serde_json::json!([{
            "id": "BOOKING-a1b2",
            "car_id": "car_001",
            "customer_name": "Ton Vila",
            "customer_email": "ton@vila.com",
            "start_date": "2025-12-01 00:00:00",
            "end_date": "2025-12-03 00:00:00",
            "status": "confirmed",
            "total_price": 900.0,
            "created_at": "2025-10-16 14:22:05.123456"
        }]);
        std::fs::write(store.cars_file(), serde_json::to_vec(&cars).unwrap()).unwrap();
        std::fs::write(store.bookings_file(), serde_json::to_vec(&bookings).unwrap()).unwrap();

        assert_eq!(store.list_cars().await.len(), 1);
        let loaded = store.list_bookings().await;
        assert_eq!(loaded.len(), 1);
        assert_eq!(loaded[0].start_day(), day(2025, 12, 1));

        // Appending keeps the legacy record and rewrites it in the current format
        let next = sample_booking("BOOKING-2", "car_001", day(2025, 12, 10), day(2025, 12, 12));
        assert!(store.append_booking(&next).await);
        assert_eq!(store.list_bookings().await.len(), 2);
    }
}
