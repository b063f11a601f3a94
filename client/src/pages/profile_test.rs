use super::*;

#[test]
fn normalized_update_trims_every_field() {
    let dto = UpdateUserDto {
        name: "  Ada ".to_owned(),
        last_name: " Lovelace".to_owned(),
        email: "ada@example.com  ".to_owned(),
    };
    assert_eq!(
        normalized_update(&dto),
        UpdateUserDto {
            name: "Ada".to_owned(),
            last_name: "Lovelace".to_owned(),
            email: "ada@example.com".to_owned(),
        }
    );
}

#[test]
fn profile_starts_loading() {
    assert_eq!(ProfileLoad::default(), ProfileLoad::Loading);
}

#[test]
fn delete_account_message_mentions_permanence() {
    assert!(DELETE_ACCOUNT_MESSAGE.starts_with("This action will permanently delete your account"));
    assert!(DELETE_ACCOUNT_MESSAGE.ends_with("Are you sure you want to continue?"));
}
