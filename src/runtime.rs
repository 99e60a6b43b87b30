//! Main application runtime - terminal event loop.

use crate::api::{ApiError, KeyPage, StoreClient, StoreStats, ValueRecord};
use crate::app::AppAction;
use crate::cli::Cli;
use crate::config::AppConfig;
use crate::query::KeyQuery;
use crate::ui::theme;
use crate::{app, event, ui};
use color_eyre::eyre::Result;
use std::time::Duration;
use tokio::sync::mpsc;

/// Run the main application.
pub async fn run(cli: Cli) -> Result<()> {
    let config = AppConfig::load();
    theme::set_theme(config.color_theme.colors());

    let base_url = cli.base_url();
    let debounce_ms = cli.debounce_ms.unwrap_or(config.debounce_ms);
    let client = StoreClient::new(&base_url, Duration::from_secs(cli.timeout_secs))?;

    let mut app = app::App::new(base_url, config, debounce_ms);

    // Channel for API commands and results
    enum ApiCommand {
        FetchStats,
        FetchKeys { token: u64, query: KeyQuery },
        FetchValue { key: String },
    }

    enum ApiResult {
        Stats(Result<StoreStats, ApiError>),
        Keys {
            token: u64,
            result: Result<KeyPage, ApiError>,
        },
        Value {
            key: String,
            result: Result<ValueRecord, ApiError>,
        },
    }

    let (cmd_tx, mut cmd_rx) = mpsc::channel::<ApiCommand>(16);
    let (result_tx, mut result_rx) = mpsc::unbounded_channel::<ApiResult>();

    // Background task for HTTP requests. One at a time is fine here: the
    // token/key matching in App handles whatever ordering results arrive in.
    tokio::spawn(async move {
        while let Some(cmd) = cmd_rx.recv().await {
            let result = match cmd {
                ApiCommand::FetchStats => ApiResult::Stats(client.fetch_stats().await),
                ApiCommand::FetchKeys { token, query } => ApiResult::Keys {
                    token,
                    result: client.fetch_keys(&query).await,
                },
                ApiCommand::FetchValue { key } => {
                    let result = client.fetch_value(&key).await;
                    ApiResult::Value { key, result }
                }
            };
            if result_tx.send(result).is_err() {
                break;
            }
        }
    });

    // Initial fetch: stats for the header, first page of keys for the list.
    let _ = cmd_tx.try_send(ApiCommand::FetchStats);
    let token = app.begin_keys_fetch();
    let _ = cmd_tx.try_send(ApiCommand::FetchKeys {
        token,
        query: app.query.snapshot(),
    });

    let mut terminal = ratatui::init();
    let mut events = event::EventHandler::new(Duration::from_millis(10));

    while app.running {
        terminal.draw(|frame| ui::render(frame, &mut app))?;

        tokio::select! {
            biased;

            event = events.next() => {
                if let Some(evt) = event {
                    match evt {
                        event::AppEvent::Key(key) => {
                            app.handle_key(key);
                        }
                        event::AppEvent::Resize(_, _) => {}
                    }
                }
            }
            result = result_rx.recv() => {
                if let Some(res) = result {
                    match res {
                        ApiResult::Stats(result) => {
                            app.apply_stats(result);
                        }
                        ApiResult::Keys { token, result } => {
                            app.apply_keys(token, result);
                        }
                        ApiResult::Value { key, result } => {
                            app.apply_value(&key, result);
                        }
                    }
                }
            }
            // Debounced search: fires once the quiet period after the last
            // keystroke elapses. Dormant while no deadline is set.
            () = async {
                match app.search_deadline {
                    Some(deadline) => {
                        tokio::time::sleep_until(tokio::time::Instant::from_std(deadline)).await;
                    }
                    None => std::future::pending().await,
                }
            } => {
                app.debounce_fired();
            }
        }

        // Process pending actions
        if let Some(action) = app.pending_action.take() {
            match action {
                AppAction::Refresh => {
                    let _ = cmd_tx.try_send(ApiCommand::FetchStats);
                    let token = app.begin_keys_fetch();
                    let _ = cmd_tx.try_send(ApiCommand::FetchKeys {
                        token,
                        query: app.query.snapshot(),
                    });
                }
                AppAction::FetchKeys => {
                    let token = app.begin_keys_fetch();
                    let _ = cmd_tx.try_send(ApiCommand::FetchKeys {
                        token,
                        query: app.query.snapshot(),
                    });
                }
                AppAction::FetchValue(key) => {
                    let _ = cmd_tx.try_send(ApiCommand::FetchValue { key });
                }
            }
        }
    }

    ratatui::restore();
    Ok(())
}
