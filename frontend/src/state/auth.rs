//! Session store shared by the gates.
//!
//! `SessionContext` owns the session snapshot signal. Every login, logout or
//! refresh bumps a generation counter; a resolution only lands if its
//! generation is still the newest one and the owning reactive scope is alive.

use std::{future::Future, time::Duration};

use hrms_access::{SessionSnapshot, SessionUser};
use leptos::*;
use thiserror::Error;

use crate::{
    api::{ApiClient, ApiError, LoginRequest},
    config,
    utils::time::with_timeout,
};

#[derive(Debug, Clone, PartialEq, Error)]
pub enum SessionError {
    #[error("no stored credential")]
    NoCredential,
    #[error("session request timed out")]
    Timeout,
    #[error(transparent)]
    Rejected(#[from] ApiError),
}

#[derive(Clone, Copy)]
pub struct SessionContext {
    state: RwSignal<SessionSnapshot>,
    generation: StoredValue<u64>,
    api: StoredValue<ApiClient>,
    timeout: Option<Duration>,
}

impl SessionContext {
    pub fn new(api: ApiClient) -> Self {
        Self::with_snapshot(api, SessionSnapshot::loading())
    }

    fn with_snapshot(api: ApiClient, snapshot: SessionSnapshot) -> Self {
        Self {
            state: create_rw_signal(snapshot),
            generation: store_value(0),
            api: store_value(api),
            timeout: None,
        }
    }

    /// Overrides the runtime-configured resolution timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Tracked read of the current snapshot.
    pub fn with<R>(&self, f: impl FnOnce(&SessionSnapshot) -> R) -> R {
        self.state.with(f)
    }

    pub fn snapshot_untracked(&self) -> SessionSnapshot {
        self.state.get_untracked()
    }

    fn next_generation(&self) -> u64 {
        self.generation.update_value(|generation| *generation += 1);
        self.generation.get_value()
    }

    fn is_current(&self, generation: u64) -> bool {
        self.generation.try_get_value() == Some(generation)
    }

    fn apply(&self, generation: u64, f: impl FnOnce(&mut SessionSnapshot)) -> bool {
        if !self.is_current(generation) {
            log::debug!("Dropping stale session result (generation {})", generation);
            return false;
        }
        self.state.try_update(f).is_some()
    }

    async fn resolve_timeout(timeout: Option<Duration>) -> Duration {
        match timeout {
            Some(timeout) => timeout,
            None => config::await_runtime_config().await.session_timeout(),
        }
    }

    /// Re-resolves the session from the stored credential.
    pub fn refresh_user(
        &self,
    ) -> impl Future<Output = Result<SessionUser, SessionError>> + 'static {
        let ctx = *self;
        let generation = self.next_generation();
        let api = self.api.get_value();
        async move {
            let result = resolve_session(&api, ctx.timeout).await;
            if let Err(err) = &result {
                if ctx.is_current(generation) && *err != SessionError::NoCredential {
                    api.credentials().clear();
                }
            }
            let user = result.as_ref().ok().cloned();
            ctx.apply(generation, |snapshot| snapshot.resolve(user));
            result
        }
    }

    pub fn login(
        &self,
        email: String,
        password: String,
    ) -> impl Future<Output = Result<SessionSnapshot, SessionError>> + 'static {
        let ctx = *self;
        let generation = self.next_generation();
        self.state.update(SessionSnapshot::begin_loading);
        let api = self.api.get_value();
        async move {
            let timeout = Self::resolve_timeout(ctx.timeout).await;
            let request = LoginRequest { email, password };
            let result = match with_timeout(timeout, api.login(request)).await {
                Some(Ok(response)) => Ok(response.user),
                Some(Err(err)) => Err(SessionError::Rejected(err)),
                None => Err(SessionError::Timeout),
            };
            match result {
                Ok(user) => {
                    log::info!("Signed in as {} ({})", user.email, user.role);
                    let snapshot = SessionSnapshot::authenticated(user.clone());
                    ctx.apply(generation, |current| current.resolve(Some(user)));
                    Ok(snapshot)
                }
                Err(err) => {
                    log::warn!("Login failed: {}", err);
                    ctx.apply(generation, SessionSnapshot::end_loading);
                    Err(err)
                }
            }
        }
    }

    /// Drops the session locally right away; the returned future only
    /// performs server-side invalidation.
    pub fn logout(&self) -> impl Future<Output = ()> + 'static {
        self.next_generation();
        self.state.update(SessionSnapshot::clear);
        let api = self.api.get_value();
        let token = api.credentials().take();
        async move {
            let Some(token) = token else {
                return;
            };
            if let Err(err) = api.invalidate_session(token).await {
                log::warn!("Server-side logout failed: {}", err);
            }
        }
    }

    #[cfg(test)]
    pub fn seeded(snapshot: SessionSnapshot) -> Self {
        Self::with_snapshot(ApiClient::default(), snapshot)
    }
}

async fn resolve_session(
    api: &ApiClient,
    timeout: Option<Duration>,
) -> Result<SessionUser, SessionError> {
    if api.credentials().read().is_none() {
        log::debug!("No stored credential; session is anonymous");
        return Err(SessionError::NoCredential);
    }
    let timeout = SessionContext::resolve_timeout(timeout).await;
    match with_timeout(timeout, api.get_me()).await {
        Some(Ok(user)) => Ok(user),
        Some(Err(err)) => {
            log::warn!("Session resolution rejected: {}", err);
            Err(SessionError::Rejected(err))
        }
        None => {
            log::warn!("Session resolution timed out after {:?}", timeout);
            Err(SessionError::Timeout)
        }
    }
}

#[component]
pub fn AuthProvider(
    #[prop(optional)] api: Option<ApiClient>,
    children: Children,
) -> impl IntoView {
    let api = api
        .or_else(use_context::<ApiClient>)
        .unwrap_or_default();
    let session = SessionContext::new(api);
    provide_context(session);
    let initial = session.refresh_user();
    spawn_local(async move {
        let _ = initial.await;
    });
    view! { <>{children()}</> }
}

pub fn use_session() -> SessionContext {
    use_context::<SessionContext>().unwrap_or_else(|| {
        log::warn!("use_session called outside AuthProvider; treating as signed out");
        SessionContext::with_snapshot(ApiClient::default(), SessionSnapshot::anonymous())
    })
}

pub fn use_login_action() -> Action<LoginRequest, Result<SessionSnapshot, SessionError>> {
    let session = use_session();
    create_action(move |request: &LoginRequest| {
        session.login(request.email.clone(), request.password.clone())
    })
}

pub fn use_logout_action() -> Action<(), ()> {
    let session = use_session();
    create_action(move |_: &()| session.logout())
}
