use async_trait::async_trait;
use std::sync::Arc;

use booking_types::errors::ApplicationError;

use crate::{
    config::Config,
    cqrs::{Query, QueryHandler, queries::GetPassengerById},
    dto::PassengerDto,
    uow::UnitOfWork,
};

pub struct GetPassengerByIdHandler {}

impl GetPassengerByIdHandler {
    pub fn new() -> Self {
        Self {}
    }
}

#[async_trait]
impl QueryHandler<GetPassengerById> for GetPassengerByIdHandler {
    async fn handle(
        &self,
        query: GetPassengerById,
        uow: &Box<dyn UnitOfWork<'_> + '_>,
        _config: &Arc<Config>,
    ) -> Result<<GetPassengerById as Query>::Output, ApplicationError> {
        // the live-only lookup doubles as the existence check
        let passenger = uow.passengers().get_by_id(query.id).await?;
        Ok(PassengerDto::from(&passenger))
    }
}
