use async_trait::async_trait;
use std::sync::Arc;

use booking_types::errors::ApplicationError;

use crate::{
    config::Config,
    cqrs::{Query, QueryHandler, queries::GetAirportById},
    dto::AirportDto,
    uow::UnitOfWork,
};

pub struct GetAirportByIdHandler {}

impl GetAirportByIdHandler {
    pub fn new() -> Self {
        Self {}
    }
}

#[async_trait]
impl QueryHandler<GetAirportById> for GetAirportByIdHandler {
    async fn handle(
        &self,
        query: GetAirportById,
        uow: &Box<dyn UnitOfWork<'_> + '_>,
        _config: &Arc<Config>,
    ) -> Result<<GetAirportById as Query>::Output, ApplicationError> {
        let airport = uow.airports().get_by_id(query.id).await?;
        Ok(AirportDto::from(&airport))
    }
}
