// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Cookie persistence for the theme preference
//!
//! Cookies are kept as `Set-Cookie` strings. The file store honours
//! `Max-Age` by recording an absolute expiry next to the cookie; the shared
//! store mirrors every write into the HTTP client's cookie jar so the
//! backend receives the same preference a browser would send.

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use chrono::{DateTime, Duration, Utc};
use reqwest::cookie::Jar;
use reqwest::Url;
use serde::{Deserialize, Serialize};

use crate::error::{LingoError, Result};

use super::Theme;

pub const THEME_COOKIE: &str = "theme";

/// One year, in seconds
pub const THEME_COOKIE_MAX_AGE: i64 = 31_536_000;

/// The `theme` cookie: site-wide, one year, SameSite=Lax
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ThemeCookie {
    pub theme: Theme,
}

impl ThemeCookie {
    pub fn new(theme: Theme) -> Self {
        Self { theme }
    }

    /// Render as a `Set-Cookie` value.
    pub fn to_set_cookie(&self) -> String {
        format!(
            "{}={}; Path=/; Max-Age={}; SameSite=Lax",
            THEME_COOKIE,
            self.theme.as_str(),
            THEME_COOKIE_MAX_AGE
        )
    }

    /// Parse a `Set-Cookie` (or `Cookie`) string, ignoring attributes.
    pub fn parse(raw: &str) -> Option<Self> {
        raw.split(';').find_map(|pair| {
            let (name, value) = pair.split_once('=')?;
            if name.trim() != THEME_COOKIE {
                return None;
            }
            value.trim().parse::<Theme>().ok().map(Self::new)
        })
    }
}

/// Extract `Max-Age` from a `Set-Cookie` string.
fn max_age(set_cookie: &str) -> Option<i64> {
    set_cookie.split(';').skip(1).find_map(|attr| {
        let (name, value) = attr.split_once('=')?;
        if name.trim().eq_ignore_ascii_case("max-age") {
            value.trim().parse().ok()
        } else {
            None
        }
    })
}

/// Storage for named cookies
pub trait CookieStore: Send + Sync {
    /// Return the stored `Set-Cookie` string, or `None` if absent or expired.
    fn get(&self, name: &str) -> Result<Option<String>>;

    /// Store a `Set-Cookie` string under `name`, replacing any previous value.
    fn set(&self, name: &str, set_cookie: &str) -> Result<()>;
}

/// In-memory store, used by tests and the one-shot commands
#[derive(Debug, Default, Clone)]
pub struct MemoryCookieStore {
    cookies: Arc<Mutex<HashMap<String, String>>>,
}

impl MemoryCookieStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl CookieStore for MemoryCookieStore {
    fn get(&self, name: &str) -> Result<Option<String>> {
        let cookies = self
            .cookies
            .lock()
            .map_err(|_| LingoError::Config("cookie store lock poisoned".to_string()))?;
        Ok(cookies.get(name).cloned())
    }

    fn set(&self, name: &str, set_cookie: &str) -> Result<()> {
        let mut cookies = self
            .cookies
            .lock()
            .map_err(|_| LingoError::Config("cookie store lock poisoned".to_string()))?;
        cookies.insert(name.to_string(), set_cookie.to_string());
        Ok(())
    }
}

#[derive(Debug, Serialize, Deserialize)]
struct StoredCookie {
    set_cookie: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    expires_at: Option<DateTime<Utc>>,
}

/// One file per cookie under a directory
#[derive(Debug, Clone)]
pub struct FileCookieStore {
    dir: PathBuf,
}

impl FileCookieStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn path_for(&self, name: &str) -> PathBuf {
        self.dir.join(format!("{}.json", name))
    }
}

impl CookieStore for FileCookieStore {
    fn get(&self, name: &str) -> Result<Option<String>> {
        let path = self.path_for(name);
        if !path.exists() {
            return Ok(None);
        }
        let content = std::fs::read_to_string(&path)?;
        let stored: StoredCookie = match serde_json::from_str(&content) {
            Ok(stored) => stored,
            Err(e) => {
                tracing::warn!(target: "lingochat.theme", path = %path.display(), error = %e, "ignoring unreadable cookie file");
                return Ok(None);
            }
        };
        if let Some(expires_at) = stored.expires_at {
            if expires_at <= Utc::now() {
                tracing::debug!(target: "lingochat.theme", cookie = name, "cookie expired");
                return Ok(None);
            }
        }
        Ok(Some(stored.set_cookie))
    }

    fn set(&self, name: &str, set_cookie: &str) -> Result<()> {
        std::fs::create_dir_all(&self.dir)?;
        let stored = StoredCookie {
            set_cookie: set_cookie.to_string(),
            expires_at: max_age(set_cookie).map(|secs| Utc::now() + Duration::seconds(secs)),
        };
        std::fs::write(self.path_for(name), serde_json::to_string_pretty(&stored)?)?;
        Ok(())
    }
}

/// Persists through an inner store and mirrors writes into an HTTP cookie jar
pub struct SharedCookieStore {
    inner: Arc<dyn CookieStore>,
    jar: Arc<Jar>,
    origin: Url,
}

impl SharedCookieStore {
    /// `origin` is the backend URL the cookies are scoped to.
    pub fn new(inner: Arc<dyn CookieStore>, jar: Arc<Jar>, origin: &str) -> Result<Self> {
        let origin = Url::parse(origin)
            .map_err(|e| LingoError::Config(format!("invalid server URL '{}': {}", origin, e)))?;
        Ok(Self { inner, jar, origin })
    }

    /// Copy an already persisted cookie into the jar.
    pub fn preload(&self, name: &str) -> Result<()> {
        if let Some(set_cookie) = self.inner.get(name)? {
            self.jar.add_cookie_str(&set_cookie, &self.origin);
        }
        Ok(())
    }
}

impl CookieStore for SharedCookieStore {
    fn get(&self, name: &str) -> Result<Option<String>> {
        self.inner.get(name)
    }

    fn set(&self, name: &str, set_cookie: &str) -> Result<()> {
        self.inner.set(name, set_cookie)?;
        self.jar.add_cookie_str(set_cookie, &self.origin);
        Ok(())
    }
}
