use super::*;

#[test]
fn first_fetch_is_initial_load() {
    let mut state = QueryState::<Vec<u32>>::default();
    assert!(!state.is_initial_load());
    state.start();
    assert!(state.is_initial_load());
    state.finish(Ok(vec![1, 2]));
    assert!(!state.loading);
    assert_eq!(state.data, Some(vec![1, 2]));
}

#[test]
fn refetch_keeps_stale_data_visible() {
    let mut state = QueryState::default();
    state.start();
    state.finish(Ok(7_u32));
    state.start();
    assert!(!state.is_initial_load());
    assert_eq!(state.data, Some(7));
}

#[test]
fn failure_without_data_blocks() {
    let mut state = QueryState::<u32>::default();
    state.start();
    state.finish(Err(ApiError::Unauthorized));
    assert_eq!(state.blocking_error(), Some(&ApiError::Unauthorized));
}

#[test]
fn failure_with_stale_data_does_not_block() {
    let mut state = QueryState::default();
    state.finish(Ok(1_u32));
    state.start();
    state.finish(Err(ApiError::Network("offline".to_owned())));
    assert!(state.blocking_error().is_none());
    assert!(state.error.is_some());
    assert_eq!(state.data, Some(1));
}

#[test]
fn success_clears_previous_error() {
    let mut state = QueryState::default();
    state.finish(Err(ApiError::Network("offline".to_owned())));
    state.start();
    state.finish(Ok(3_u32));
    assert!(state.error.is_none());
}
