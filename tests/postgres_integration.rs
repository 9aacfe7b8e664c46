//! PostgreSQL round-trip tests for the profile adapters.
//!
//! Require a live database. Run with:
//!
//! ```text
//! DATABASE_URL=postgres://... cargo test --test postgres_integration -- --ignored
//! ```
//!
//! Each test works on its own freshly issued ids, so the suite can share a
//! database with other data.

use secrecy::Secret;
use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;

use medical_profiles::adapters::postgres::{
    connect_options, connect_pool, ensure_schema, PostgresProfileReader,
    PostgresProfileRepository,
};
use medical_profiles::config::{DatabaseConfig, SslMode};
use medical_profiles::domain::foundation::{ErrorCode, ProfileId};
use medical_profiles::domain::profile::{DisplayUrl, MedicalProfile, ProfileFields};
use medical_profiles::ports::{ProfileReader, ProfileRepository};

fn database_config() -> DatabaseConfig {
    let url = std::env::var("DATABASE_URL").expect("DATABASE_URL must be set");
    let ssl_mode = match std::env::var("TEST_DATABASE_SSL_MODE").as_deref() {
        Ok("require") => SslMode::Require,
        Ok("disable") => SslMode::Disable,
        _ => SslMode::Prefer,
    };
    DatabaseConfig {
        url: Secret::new(url),
        ssl_mode,
        ..Default::default()
    }
}

async fn pool() -> PgPool {
    let pool = connect_pool(&database_config()).expect("valid database settings");
    ensure_schema(&pool).await.expect("schema");
    pool
}

fn new_profile(name: &str) -> MedicalProfile {
    let id = ProfileId::generate();
    let url = DisplayUrl::default().for_profile(&id);
    MedicalProfile::new(
        id,
        ProfileFields {
            name: Some(name.to_string()),
            bloodtype: Some("AB-".to_string()),
            ..Default::default()
        },
        Some(url),
    )
}

#[tokio::test]
#[ignore = "requires DATABASE_URL"]
async fn insert_then_find_round_trips_every_column() {
    let pool = pool().await;
    let repository = PostgresProfileRepository::new(pool.clone());
    let reader = PostgresProfileReader::new(pool);

    let profile = new_profile("Round Trip");
    repository.insert(&profile).await.unwrap();

    let found = reader.find_by_id(&profile.id).await.unwrap();
    assert_eq!(found, Some(profile.clone()));

    repository.delete(&profile.id).await.unwrap();
}

#[tokio::test]
#[ignore = "requires DATABASE_URL"]
async fn duplicate_id_is_database_error() {
    let pool = pool().await;
    let repository = PostgresProfileRepository::new(pool);

    let profile = new_profile("Duplicate");
    repository.insert(&profile).await.unwrap();

    let err = repository.insert(&profile).await.unwrap_err();
    assert_eq!(err.code(), ErrorCode::DatabaseError);

    repository.delete(&profile.id).await.unwrap();
}

#[tokio::test]
#[ignore = "requires DATABASE_URL"]
async fn update_and_delete_report_rows_affected() {
    let pool = pool().await;
    let repository = PostgresProfileRepository::new(pool.clone());
    let reader = PostgresProfileReader::new(pool);

    let profile = new_profile("Before");
    repository.insert(&profile).await.unwrap();

    let fields = ProfileFields {
        name: Some("After".to_string()),
        ..Default::default()
    };
    let updated = repository
        .update(&profile.id, &fields, profile.url.as_deref())
        .await
        .unwrap();
    assert_eq!(updated, 1);

    let stored = reader.find_by_id(&profile.id).await.unwrap().unwrap();
    assert_eq!(stored.fields, fields);
    assert_eq!(stored.url, profile.url);

    assert_eq!(repository.delete(&profile.id).await.unwrap(), 1);
    assert_eq!(repository.delete(&profile.id).await.unwrap(), 0);

    let ghost = ProfileId::generate();
    assert_eq!(repository.update(&ghost, &fields, None).await.unwrap(), 0);
}

#[tokio::test]
#[ignore = "requires DATABASE_URL"]
async fn list_includes_inserted_profiles_in_name_order() {
    let pool = pool().await;
    let repository = PostgresProfileRepository::new(pool.clone());
    let reader = PostgresProfileReader::new(pool);

    let zed = new_profile("zz-list-test-b");
    let amy = new_profile("zz-list-test-a");
    repository.insert(&zed).await.unwrap();
    repository.insert(&amy).await.unwrap();

    let listed = reader.list_by_name().await.unwrap();
    let positions: Vec<usize> = [&amy.id, &zed.id]
        .iter()
        .map(|id| listed.iter().position(|p| &&p.id == id).unwrap())
        .collect();
    assert!(positions[0] < positions[1]);

    repository.delete(&zed.id).await.unwrap();
    repository.delete(&amy.id).await.unwrap();
}

/// Table layout written before the `url` column existed.
const LEGACY_PROFILES_TABLE: &str = r#"
CREATE TABLE medical_profiles (
    id TEXT PRIMARY KEY,
    name TEXT,
    dob TEXT,
    bloodtype TEXT,
    allergies TEXT,
    conditions TEXT,
    socialsecuritynumber TEXT,
    insurancepolicy TEXT,
    emergencycontactname TEXT,
    emergencycontactphone TEXT
)
"#;

#[tokio::test]
#[ignore = "requires DATABASE_URL"]
async fn rows_from_table_without_url_column_read_as_null_url() {
    let admin = pool().await;
    let schema = format!("legacy_{}", ProfileId::generate().as_str().replace('-', ""));
    sqlx::query(&format!("CREATE SCHEMA {}", schema))
        .execute(&admin)
        .await
        .unwrap();

    let options = connect_options(&database_config())
        .unwrap()
        .options([("search_path", schema.as_str())]);
    let legacy = PgPoolOptions::new()
        .max_connections(1)
        .connect_with(options)
        .await
        .unwrap();

    sqlx::query(LEGACY_PROFILES_TABLE)
        .execute(&legacy)
        .await
        .unwrap();
    sqlx::query("INSERT INTO medical_profiles (id, name, bloodtype) VALUES ($1, $2, $3)")
        .bind("legacy-1")
        .bind("Old Row")
        .bind("B+")
        .execute(&legacy)
        .await
        .unwrap();

    let reader = PostgresProfileReader::new(legacy.clone());
    let id = ProfileId::new("legacy-1").unwrap();

    let found = reader.find_by_id(&id).await.unwrap().unwrap();
    assert_eq!(found.fields.name.as_deref(), Some("Old Row"));
    assert_eq!(found.fields.bloodtype.as_deref(), Some("B+"));
    assert!(found.url.is_none());

    let listed = reader.list_by_name().await.unwrap();
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0].id, id);
    assert!(listed[0].url.is_none());

    legacy.close().await;
    sqlx::query(&format!("DROP SCHEMA {} CASCADE", schema))
        .execute(&admin)
        .await
        .unwrap();
}
