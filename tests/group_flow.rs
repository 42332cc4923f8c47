#![cfg(feature = "migration")]

mod common;

use common::{register, setup, ADMIN_GROUP};
use flicket_identity::entity::group;
use flicket_identity::{IdentityStore, UserRepository};

async fn make_group(store: &IdentityStore, name: &str) -> group::Model {
    store.save_group(group::ActiveModel::named(name)).await.unwrap()
}

#[tokio::test]
async fn user_without_groups_is_not_admin() {
    let db = setup().await;
    let user = register(&db.store, "loner", "password").await;

    assert!(db.store.groups_of(user.id).await.unwrap().is_empty());
    assert!(!user.is_admin(&db.store, ADMIN_GROUP).await.unwrap());
}

#[tokio::test]
async fn single_non_admin_group() {
    let db = setup().await;
    let user = register(&db.store, "helper", "password").await;
    let support = make_group(&db.store, "support").await;
    db.store.add_member(support.id, user.id).await.unwrap();

    assert!(!user.is_admin(&db.store, ADMIN_GROUP).await.unwrap());
}

#[tokio::test]
async fn single_admin_group() {
    let db = setup().await;
    let user = register(&db.store, "boss", "password").await;
    let admins = make_group(&db.store, ADMIN_GROUP).await;
    db.store.add_member(admins.id, user.id).await.unwrap();

    assert!(user.is_admin(&db.store, ADMIN_GROUP).await.unwrap());
}

#[tokio::test]
async fn two_groups_with_and_without_admin() {
    let db = setup().await;
    let admin = register(&db.store, "admin2", "password").await;
    let staff = register(&db.store, "staff2", "password").await;
    let admins = make_group(&db.store, ADMIN_GROUP).await;
    let support = make_group(&db.store, "support").await;
    let sales = make_group(&db.store, "sales").await;

    db.store.add_member(support.id, admin.id).await.unwrap();
    db.store.add_member(admins.id, admin.id).await.unwrap();
    db.store.add_member(support.id, staff.id).await.unwrap();
    db.store.add_member(sales.id, staff.id).await.unwrap();

    assert!(admin.is_admin(&db.store, ADMIN_GROUP).await.unwrap());
    assert!(!staff.is_admin(&db.store, ADMIN_GROUP).await.unwrap());
}

#[tokio::test]
async fn admin_group_name_comes_from_the_caller() {
    let db = setup().await;
    let user = register(&db.store, "operator", "password").await;
    let ops = make_group(&db.store, "ops").await;
    db.store.add_member(ops.id, user.id).await.unwrap();

    assert!(!user.is_admin(&db.store, ADMIN_GROUP).await.unwrap());
    assert!(user.is_admin(&db.store, "ops").await.unwrap());
}

#[tokio::test]
async fn admin_check_sees_later_membership_changes() {
    let db = setup().await;
    let user = register(&db.store, "promoted", "password").await;
    let admins = make_group(&db.store, ADMIN_GROUP).await;

    assert!(!user.is_admin(&db.store, ADMIN_GROUP).await.unwrap());
    db.store.add_member(admins.id, user.id).await.unwrap();
    assert!(user.is_admin(&db.store, ADMIN_GROUP).await.unwrap());
    assert!(db.store.remove_member(admins.id, user.id).await.unwrap());
    assert!(!user.is_admin(&db.store, ADMIN_GROUP).await.unwrap());
}

#[tokio::test]
async fn groups_of_a_user_are_sorted_by_name() {
    let db = setup().await;
    let user = register(&db.store, "sorted", "password").await;
    for name in ["zeta", "alpha", "mike"] {
        let group = make_group(&db.store, name).await;
        db.store.add_member(group.id, user.id).await.unwrap();
    }

    let names: Vec<String> = db
        .store
        .groups_of(user.id)
        .await
        .unwrap()
        .into_iter()
        .map(|g| g.group_name)
        .collect();
    assert_eq!(names, ["alpha", "mike", "zeta"]);
}

#[tokio::test]
async fn members_of_a_group_are_sorted_by_id() {
    let db = setup().await;
    let group = make_group(&db.store, "everyone").await;
    let first = register(&db.store, "first", "password").await;
    let second = register(&db.store, "second", "password").await;
    register(&db.store, "outsider", "password").await;

    db.store.add_member(group.id, second.id).await.unwrap();
    db.store.add_member(group.id, first.id).await.unwrap();

    let ids: Vec<i32> = db
        .store
        .members_of(group.id)
        .await
        .unwrap()
        .iter()
        .map(|u| u.id)
        .collect();
    assert_eq!(ids, [first.id, second.id]);
}

#[tokio::test]
async fn membership_edges_are_unique() {
    let db = setup().await;
    let user = register(&db.store, "twice", "password").await;
    let group = make_group(&db.store, "support").await;

    db.store.add_member(group.id, user.id).await.unwrap();
    db.store.add_member(group.id, user.id).await.unwrap();

    assert_eq!(db.store.groups_of(user.id).await.unwrap().len(), 1);
    assert!(db.store.remove_member(group.id, user.id).await.unwrap());
    assert!(!db.store.remove_member(group.id, user.id).await.unwrap());
}

#[tokio::test]
async fn group_lookup_by_name() {
    let db = setup().await;
    let created = make_group(&db.store, "support").await;

    let found = db.store.find_group_by_name("support").await.unwrap().unwrap();
    assert_eq!(found, created);
    assert_eq!(found.to_string(), "support");
    assert!(db.store.find_group_by_name("missing").await.unwrap().is_none());
}
