mod common;

use anyhow::Result;
use chrono::NaiveDate;
use teller::profile::legal::{self, LegalProfileInput};
use teller::profile::physical::{self, PhysicalProfileInput};
use teller::Error;

use common::{register_user, setup_pool};

fn physical_input() -> PhysicalProfileInput {
    PhysicalProfileInput {
        last_name: "Иванова".to_owned(),
        first_name: "Анна".to_owned(),
        patronymic: "Сергеевна".to_owned(),
        birth_day: NaiveDate::from_ymd_opt(1990, 4, 12).unwrap(),
        address: "Москва, ул. Ленина, 1".to_owned(),
        phone: "+79990001122".to_owned(),
        gender: "female".to_owned(),
    }
}

fn legal_input() -> LegalProfileInput {
    LegalProfileInput {
        org_name: "Ромашка".to_owned(),
        address: "Москва, ул. Ленина, 2".to_owned(),
        boss_full_name: "Петров Петр Петрович".to_owned(),
        accountant_full_name: "Сидорова Мария Ивановна".to_owned(),
        phone: "+74950001122".to_owned(),
        ownership_form: "ООО".to_owned(),
    }
}

#[tokio::test]
async fn create_and_list_physical_profile() -> Result<()> {
    let db = setup_pool().await?;
    let user = register_user(&db, "alice").await?;

    let profile = physical::create(&db, user.id, physical_input()).await?;
    assert_eq!(profile.last_name, "Иванова");
    assert!(!profile.is_staff);

    let profiles = physical::list_for_user(&db, user.id).await?;
    assert_eq!(profiles.len(), 1);
    assert_eq!(profiles[0].id, profile.id);

    // registration already attached the physical role; still exactly one
    let (roles,): (i64,) = sqlx::query_as(
        "SELECT COUNT(*) FROM type_list_users tlu \
         JOIN type_users tu ON tu.id = tlu.type_user_id \
         WHERE tlu.user_id = $1 AND tu.name = 'physical'",
    )
    .bind(user.id)
    .fetch_one(&db)
    .await?;
    assert_eq!(roles, 1);

    Ok(())
}

#[tokio::test]
async fn legal_profile_creation_attaches_legal_role() -> Result<()> {
    let db = setup_pool().await?;
    let user = register_user(&db, "alice").await?;

    legal::create(&db, user.id, legal_input()).await?;

    let (roles,): (i64,) = sqlx::query_as(
        "SELECT COUNT(*) FROM type_list_users tlu \
         JOIN type_users tu ON tu.id = tlu.type_user_id \
         WHERE tlu.user_id = $1 AND tu.name = 'legal'",
    )
    .bind(user.id)
    .fetch_one(&db)
    .await?;
    assert_eq!(roles, 1);

    Ok(())
}

#[tokio::test]
async fn profiles_are_scoped_to_their_owner() -> Result<()> {
    let db = setup_pool().await?;
    let alice = register_user(&db, "alice").await?;
    let bob = register_user(&db, "bob").await?;

    let profile = physical::create(&db, alice.id, physical_input()).await?;

    let err = physical::get(&db, bob.id, profile.id).await.unwrap_err();
    assert!(matches!(err, Error::NotFound(_)));

    let err = physical::delete(&db, bob.id, profile.id).await.unwrap_err();
    assert!(matches!(err, Error::NotFound(_)));

    // still there for its owner
    physical::get(&db, alice.id, profile.id).await?;

    Ok(())
}

#[tokio::test]
async fn update_then_delete_physical_profile() -> Result<()> {
    let db = setup_pool().await?;
    let user = register_user(&db, "alice").await?;
    let profile = physical::create(&db, user.id, physical_input()).await?;

    let mut input = physical_input();
    input.address = "Тверь, ул. Советская, 5".to_owned();
    let updated = physical::update(&db, user.id, profile.id, input).await?;
    assert_eq!(updated.address, "Тверь, ул. Советская, 5");

    physical::delete(&db, user.id, profile.id).await?;

    let err = physical::get(&db, user.id, profile.id).await.unwrap_err();
    assert!(matches!(err, Error::NotFound(_)));

    Ok(())
}

#[tokio::test]
async fn invalid_gender_and_phone_are_rejected() -> Result<()> {
    let db = setup_pool().await?;
    let user = register_user(&db, "alice").await?;

    let mut input = physical_input();
    input.gender = "other".to_owned();
    let err = physical::create(&db, user.id, input).await.unwrap_err();
    assert!(matches!(err, Error::Validation(_)));

    let mut input = physical_input();
    input.phone = "not-a-phone".to_owned();
    let err = physical::create(&db, user.id, input).await.unwrap_err();
    assert!(matches!(err, Error::Validation(_)));

    let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM physical_profiles")
        .fetch_one(&db)
        .await?;
    assert_eq!(count, 0);

    Ok(())
}

#[tokio::test]
async fn unknown_ownership_form_is_rejected() -> Result<()> {
    let db = setup_pool().await?;
    let user = register_user(&db, "alice").await?;

    let mut input = legal_input();
    input.ownership_form = "GmbH".to_owned();
    let err = legal::create(&db, user.id, input).await.unwrap_err();
    assert!(matches!(err, Error::Validation(_)));

    Ok(())
}
