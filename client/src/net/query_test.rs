use super::*;

#[test]
fn keys_map_to_their_family() {
    assert_eq!(QueryKey::HomeLoans.family(), QueryFamily::Loans);
    assert_eq!(QueryKey::ManagerLoans("m@example.com".to_owned()).family(), QueryFamily::Loans);
    assert_eq!(QueryKey::Applications(None).family(), QueryFamily::Applications);
    assert_eq!(QueryKey::MyApplications("b@example.com".to_owned()).family(), QueryFamily::Applications);
    assert_eq!(QueryKey::Application("a1".to_owned()).family(), QueryFamily::Applications);
    assert_eq!(QueryKey::User("b@example.com".to_owned()).family(), QueryFamily::Users);
}

#[test]
fn fresh_cache_starts_at_zero() {
    let cache = QueryCache::default();
    for family in [QueryFamily::Loans, QueryFamily::Applications, QueryFamily::Users] {
        assert_eq!(cache.version(family), 0);
    }
}

#[test]
fn transition_invalidates_only_applications() {
    let mut cache = QueryCache::default();
    cache.invalidate(Mutation::Transition(Transition::Approve));
    assert_eq!(cache.version(QueryFamily::Applications), 1);
    assert_eq!(cache.version(QueryFamily::Loans), 0);
    assert_eq!(cache.version(QueryFamily::Users), 0);
}

#[test]
fn admin_update_invalidates_users() {
    let mut cache = QueryCache::default();
    cache.invalidate(Mutation::AdminUpdateUser);
    cache.invalidate(Mutation::AdminUpdateUser);
    assert_eq!(cache.version(QueryFamily::Users), 2);
}

#[test]
fn every_mutation_invalidates_something() {
    let all = [
        Mutation::CreateLoan,
        Mutation::UpdateLoan,
        Mutation::DeleteLoan,
        Mutation::ToggleShowOnHome,
        Mutation::SubmitApplication,
        Mutation::Transition(Transition::Pay),
        Mutation::SaveUser,
        Mutation::UpdateProfile,
        Mutation::AdminUpdateUser,
    ];
    for mutation in all {
        assert!(!mutation.invalidates().is_empty(), "{mutation:?}");
    }
}
