#[cfg(test)]
mod tests {
    use crate::core::api::{ApiError, LoginResponse, PrivateGrant};
    use crate::core::flows::testing::FakeApi;
    use crate::core::flows::{self, CancelToken, PrivateOutcome, Route, SubmitOutcome};
    use crate::core::session::{
        MemoryStorage, STORAGE_KEY_TOKEN, STORAGE_KEY_USER, SessionStorage,
    };
    use crate::core::{AuthAction, AuthDispatch, AuthStore, LoginRequest, UserRecord};

    fn user() -> UserRecord {
        UserRecord::new(12, "ana@example.com").with_names(Some("Ana"), Some("Ruiz"))
    }

    fn persisted(token: &str) -> MemoryStorage {
        let storage = MemoryStorage::new();
        storage.set_item(STORAGE_KEY_TOKEN, token).unwrap();
        storage
            .set_item(STORAGE_KEY_USER, &serde_json::to_string(&user()).unwrap())
            .unwrap();
        storage
    }

    #[test]
    fn test_cold_start_without_session() {
        let store = AuthStore::hydrate(MemoryStorage::new());
        let state = store.state();

        assert!(state.token().is_none());
        assert!(!state.is_authenticated());
        assert!(!state.is_loading());
    }

    #[test]
    fn test_cold_start_with_session() {
        let store = AuthStore::hydrate(persisted("abc"));
        let state = store.state();

        assert_eq!(state.token(), Some("abc"));
        assert!(state.is_authenticated());
        assert_eq!(state.user(), Some(&user()));
    }

    #[test]
    fn test_session_survives_reload() {
        let storage = MemoryStorage::new();
        let first_tab_load = AuthStore::new(storage.clone());
        first_tab_load.dispatch(AuthAction::LoginSuccess {
            token: "T".to_string(),
            user: user(),
        });

        let reloaded = AuthStore::hydrate(storage.clone());
        assert_eq!(reloaded.state().token(), Some("T"));

        reloaded.dispatch(AuthAction::Logout);
        let after_logout = AuthStore::hydrate(storage);
        assert!(!after_logout.state().is_authenticated());
    }

    #[tokio::test]
    async fn test_restored_session_rejected_on_private_page() {
        let storage = persisted("stale");
        let store = AuthStore::hydrate(storage.clone());
        let api = FakeApi::new();
        api.private.lock().unwrap().push_back(Err(ApiError::Rejected {
            status: 403,
            message: None,
        }));

        let outcome = flows::verify_private(&api, &store, &CancelToken::new()).await;

        assert_eq!(outcome, PrivateOutcome::Redirect(Route::Login));
        assert!(store.state().token().is_none());
        assert!(!store.state().is_authenticated());
        assert!(storage.is_empty());
    }

    #[tokio::test]
    async fn test_login_then_private_then_logout() {
        let storage = MemoryStorage::new();
        let store = AuthStore::hydrate(storage.clone());
        let api = FakeApi::new();
        api.login.lock().unwrap().push_back(Ok(LoginResponse {
            access_token: "T".to_string(),
            user: user(),
            message: Some("Login successful".to_string()),
        }));
        api.private
            .lock()
            .unwrap()
            .push_back(Ok(PrivateGrant::default()));

        let cancel = CancelToken::new();
        let login = flows::submit_login(
            &api,
            &store,
            &LoginRequest::new("ana@example.com", "secret"),
            &cancel,
        )
        .await;
        let SubmitOutcome::Redirect { to, .. } = login else {
            panic!("login did not redirect: {:?}", login);
        };
        assert_eq!(to, Route::Private);

        let private = flows::verify_private(&api, &store, &cancel).await;
        assert!(matches!(private, PrivateOutcome::Granted(_)));

        let signed_out = flows::logout(&store);
        assert_eq!(signed_out.to, Route::Login);
        assert_eq!(signed_out.notice, flows::LOGOUT_NOTICE);
        assert!(!store.state().is_authenticated());
        assert!(storage.is_empty());
        assert_eq!(
            api.calls(),
            vec![
                "POST /api/login ana@example.com",
                "GET /api/private Bearer T"
            ]
        );
    }

    #[tokio::test]
    async fn test_failed_login_then_retry() {
        let store = AuthStore::new(MemoryStorage::new());
        let api = FakeApi::new();
        api.login.lock().unwrap().push_back(Err(ApiError::Rejected {
            status: 401,
            message: Some("Invalid credentials".to_string()),
        }));
        api.login.lock().unwrap().push_back(Ok(LoginResponse {
            access_token: "T2".to_string(),
            user: user(),
            message: None,
        }));
        let request = LoginRequest::new("ana@example.com", "secret");

        let first = flows::submit_login(&api, &store, &request, &CancelToken::new()).await;
        assert_eq!(first, SubmitOutcome::Failed("Invalid credentials".to_string()));
        assert_eq!(store.state().auth_error(), Some("Invalid credentials"));

        let second = flows::submit_login(&api, &store, &request, &CancelToken::new()).await;
        assert!(matches!(second, SubmitOutcome::Redirect { .. }));
        assert!(store.state().auth_error().is_none());
        assert_eq!(store.state().token(), Some("T2"));
    }

    #[tokio::test]
    async fn test_offline_private_page_then_back_online() {
        let store = AuthStore::hydrate(persisted("abc"));
        let api = FakeApi::new();
        api.private
            .lock()
            .unwrap()
            .push_back(Err(ApiError::Timeout));
        api.private
            .lock()
            .unwrap()
            .push_back(Ok(PrivateGrant::default()));

        let offline = flows::verify_private(&api, &store, &CancelToken::new()).await;
        assert!(matches!(offline, PrivateOutcome::Offline(_)));
        assert!(store.state().is_authenticated());

        let online = flows::verify_private(&api, &store, &CancelToken::new()).await;
        assert!(matches!(online, PrivateOutcome::Granted(_)));
    }

    #[tokio::test]
    async fn test_offline_private_page_can_reach_login_form() {
        let store = AuthStore::hydrate(persisted("abc"));
        let api = FakeApi::new();
        api.private
            .lock()
            .unwrap()
            .push_back(Err(ApiError::Network("connection refused".to_string())));

        let offline = flows::verify_private(&api, &store, &CancelToken::new()).await;
        assert!(matches!(offline, PrivateOutcome::Offline(_)));

        // The session is kept, but opening the login page does not bounce back
        assert!(store.state().is_authenticated());
        assert_eq!(flows::login_page_redirect(None, &store.state()), None);
        assert_eq!(api.call_count(), 1);
    }
}
