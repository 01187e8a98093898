//! Database repository layer for all domain entities.
//!
//! This module contains repository structs that handle database operations (CRUD) for each
//! domain in the application. Repositories use SeaORM entity models internally and hand
//! entity models back to the services, which convert them into domain models. Every
//! owner-scoped lookup has an unscoped counterpart used when the caller holds the
//! "all" scope of a resource.

pub mod audit;
pub mod friendship;
pub mod organization;
pub mod user;
pub mod vacation;

#[cfg(test)]
mod test;

use sea_orm::{DatabaseConnection, DbErr, EntityTrait, PaginatorTrait, Select};

use crate::server::model::page::{Page, PageRequest};

/// Fetches one page of `select` along with the total element count.
///
/// # Arguments
/// - `db` - Database connection
/// - `select` - Filtered and ordered query
/// - `request` - Zero-indexed page and page size
///
/// # Returns
/// - `Ok(Page)` - Requested page; empty when past the last page or when the
///   page offset does not fit in a `u64`
/// - `Err(DbErr)` - Database error
pub(crate) async fn fetch_page<E>(
    db: &DatabaseConnection,
    select: Select<E>,
    request: PageRequest,
) -> Result<Page<E::Model>, DbErr>
where
    E: EntityTrait,
    E::Model: Send + Sync,
{
    let paginator = select.paginate(db, request.per_page);
    let total = paginator.num_items().await?;

    if request.page.checked_mul(request.per_page).is_none() {
        return Ok(Page::new(Vec::new(), request.page, request.per_page, total));
    }

    let items = paginator.fetch_page(request.page).await?;

    Ok(Page::new(items, request.page, request.per_page, total))
}
