use std::{future::Future, sync::Arc};
use tokio_util::sync::CancellationToken;

use booking_types::errors::ApplicationError;

use crate::{
    config::Config,
    cqrs::{Command, CommandHandler, Query, QueryHandler},
    uow::UnitOfWorkProvider,
};

/// Mediator between the transport and the handlers.
///
/// Holds no business rules. For every invocation it validates the request
/// before any store is touched, opens one Unit of Work bound to the caller's
/// cancellation token, runs the handler under the configured request timeout,
/// then settles the transaction.
pub struct AppBus {
    config: Arc<Config>,
    uow_provider: Arc<dyn UnitOfWorkProvider>,
}

impl AppBus {
    pub fn new(config: Arc<Config>, uow_provider: Arc<dyn UnitOfWorkProvider>) -> Self {
        Self {
            config,
            uow_provider,
        }
    }

    pub fn config(&self) -> &Arc<Config> {
        &self.config
    }

    /// Runs a state-changing command.
    ///
    /// An invalid command never opens a Unit of Work. Otherwise the UoW is
    /// committed when the handler returns `Ok` and rolled back when it fails.
    pub async fn execute<C, H>(
        &self,
        cmd: C,
        handler: H,
        cancel: CancellationToken,
    ) -> Result<C::Output, ApplicationError>
    where
        C: Command,
        H: CommandHandler<C>,
    {
        let command_name = short_type_name::<C>();
        if let Err(violations) = cmd.validate() {
            tracing::debug!(command = command_name, %violations, "Command rejected");
            return Err(violations.into());
        }

        tracing::debug!(command = command_name, "Dispatching command");
        // the deadline bounds the handler only; a commit in flight always settles
        let (uow, outcome) = self
            .with_deadline(&cancel, async {
                let uow = self.uow_provider.begin(cancel.clone()).await?;
                let outcome = handler.handle(cmd, &uow, &self.config).await;
                Ok((uow, outcome))
            })
            .await?;

        match outcome {
            Ok(output) => {
                uow.commit().await?;
                Ok(output)
            }
            Err(e) => {
                // the handler error wins over a failed rollback
                if let Err(rollback_err) = uow.rollback().await {
                    tracing::error!(command = command_name, "Rollback failed: {rollback_err}");
                }
                Err(e)
            }
        }
    }

    /// Runs a read-only query. Its Unit of Work is rolled back whatever the
    /// outcome.
    pub async fn query<Q, H>(
        &self,
        query: Q,
        handler: H,
        cancel: CancellationToken,
    ) -> Result<Q::Output, ApplicationError>
    where
        Q: Query,
        H: QueryHandler<Q>,
    {
        let query_name = short_type_name::<Q>();
        if let Err(violations) = query.validate() {
            tracing::debug!(query = query_name, %violations, "Query rejected");
            return Err(violations.into());
        }

        tracing::debug!(query = query_name, "Dispatching query");
        self.with_deadline(&cancel, async {
            let uow = self.uow_provider.begin(cancel.clone()).await?;

            let result = handler.handle(query, &uow, &self.config).await;

            if let Err(rollback_err) = uow.rollback().await {
                tracing::error!(query = query_name, "Rollback failed: {rollback_err}");
            }

            result
        })
        .await
    }

    /// Runs `work` under the configured timeout. On expiry the token is
    /// cancelled and the unfinished work is dropped along with its transaction.
    async fn with_deadline<T, F>(
        &self,
        cancel: &CancellationToken,
        work: F,
    ) -> Result<T, ApplicationError>
    where
        F: Future<Output = Result<T, ApplicationError>>,
    {
        let timeout = self.config.request_timeout;
        match tokio::time::timeout(timeout, work).await {
            Ok(result) => result,
            Err(_) => {
                cancel.cancel();
                tracing::warn!("Request exceeded its {timeout:?} deadline");
                Err(ApplicationError::Timeout(timeout))
            }
        }
    }
}

fn short_type_name<T>() -> &'static str {
    let full = std::any::type_name::<T>();
    full.rsplit("::").next().unwrap_or(full)
}
