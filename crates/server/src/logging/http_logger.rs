// Copyright (C) 2026 Auction Marketplace Developers
// SPDX-License-Identifier: GPL-3.0-or-later

use axum::{extract::Request, middleware::Next, response::Response};
use std::time::Instant;

/// HTTP logger middleware: method, path, status and duration per request.
///
/// 2xx/3xx log at INFO, 4xx at WARN, 5xx at ERROR, all under the `http`
/// target. Format: "GET /api/auctions 200 12ms".
pub async fn http_logger_middleware(req: Request, next: Next) -> Response {
    let method = req.method().clone();
    let path = match req.uri().query() {
        Some(query) => format!("{}?{}", req.uri().path(), query),
        None => req.uri().path().to_string(),
    };
    let start = Instant::now();

    let response = next.run(req).await;

    let status = response.status().as_u16();
    let duration_ms = start.elapsed().as_millis();

    match status {
        200..=399 => {
            tracing::info!(
                target: "http",
                method = %method,
                path = %path,
                status,
                duration_ms,
                "{} {} {} {}ms",
                method,
                path,
                status,
                duration_ms
            );
        }
        400..=499 => {
            tracing::warn!(
                target: "http",
                method = %method,
                path = %path,
                status,
                duration_ms,
                "{} {} {} {}ms",
                method,
                path,
                status,
                duration_ms
            );
        }
        _ => {
            tracing::error!(
                target: "http",
                method = %method,
                path = %path,
                status,
                duration_ms,
                "{} {} {} {}ms",
                method,
                path,
                status,
                duration_ms
            );
        }
    }

    response
}
