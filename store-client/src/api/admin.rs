//! Admin back-office endpoints
//!
//! CRUD over products, brands, categories, users, reviews and logs, plus
//! database backup management. All routes live under `/admin` and require
//! an admin bearer token; the backend enforces the role.

use bytes::Bytes;
use shared::Paginated;
use shared::models::{
    BackupList, BackupResponse, Brand, BrandUpsert, Category, CategoryUpsert, LogEntry, Product,
    ProductCreate, ProductUpdate, Review, ReviewUpdate, User, UserCreate, UserUpdate,
};

use crate::{ClientResult, HttpClient};

/// `/admin/*` endpoint group
#[derive(Debug, Clone, Copy)]
pub struct AdminApi<'a> {
    pub(crate) http: &'a HttpClient,
}

impl AdminApi<'_> {
    // ========== Products ==========

    pub async fn list_products(&self, page: u32, limit: u32) -> ClientResult<Paginated<Product>> {
        self.http
            .get_query("/admin/products", &[("page", page), ("limit", limit)])
            .await
    }

    pub async fn get_product(&self, id: i64) -> ClientResult<Product> {
        self.http.get(&format!("/admin/products/{id}")).await
    }

    pub async fn create_product(&self, payload: &ProductCreate) -> ClientResult<Product> {
        self.http.post("/admin/products", payload).await
    }

    pub async fn update_product(&self, id: i64, payload: &ProductUpdate) -> ClientResult<Product> {
        self.http.put(&format!("/admin/products/{id}"), payload).await
    }

    pub async fn delete_product(&self, id: i64) -> ClientResult<()> {
        self.http.delete(&format!("/admin/products/{id}")).await
    }

    // ========== Brands ==========

    pub async fn list_brands(&self) -> ClientResult<Vec<Brand>> {
        self.http.get("/admin/brands").await
    }

    pub async fn create_brand(&self, payload: &BrandUpsert) -> ClientResult<Brand> {
        self.http.post("/admin/brands", payload).await
    }

    pub async fn update_brand(&self, id: i64, payload: &BrandUpsert) -> ClientResult<Brand> {
        self.http.put(&format!("/admin/brands/{id}"), payload).await
    }

    pub async fn delete_brand(&self, id: i64) -> ClientResult<()> {
        self.http.delete(&format!("/admin/brands/{id}")).await
    }

    // ========== Categories ==========

    pub async fn list_categories(&self) -> ClientResult<Vec<Category>> {
        self.http.get("/admin/categories").await
    }

    pub async fn create_category(&self, payload: &CategoryUpsert) -> ClientResult<Category> {
        self.http.post("/admin/categories", payload).await
    }

    pub async fn update_category(&self, id: i64, payload: &CategoryUpsert) -> ClientResult<Category> {
        self.http
            .put(&format!("/admin/categories/{id}"), payload)
            .await
    }

    pub async fn delete_category(&self, id: i64) -> ClientResult<()> {
        self.http.delete(&format!("/admin/categories/{id}")).await
    }

    // ========== Users ==========

    pub async fn list_users(&self, page: u32, limit: u32) -> ClientResult<Paginated<User>> {
        self.http
            .get_query("/admin/users", &[("page", page), ("limit", limit)])
            .await
    }

    pub async fn get_user(&self, id: i64) -> ClientResult<User> {
        self.http.get(&format!("/admin/users/{id}")).await
    }

    pub async fn create_user(&self, payload: &UserCreate) -> ClientResult<User> {
        self.http.post("/admin/users", payload).await
    }

    pub async fn update_user(&self, id: i64, payload: &UserUpdate) -> ClientResult<User> {
        self.http.put(&format!("/admin/users/{id}"), payload).await
    }

    pub async fn delete_user(&self, id: i64) -> ClientResult<()> {
        self.http.delete(&format!("/admin/users/{id}")).await
    }

    // ========== Reviews ==========

    pub async fn list_reviews(&self, page: u32, limit: u32) -> ClientResult<Paginated<Review>> {
        self.http
            .get_query("/admin/reviews", &[("page", page), ("limit", limit)])
            .await
    }

    pub async fn update_review(&self, id: i64, payload: &ReviewUpdate) -> ClientResult<Review> {
        self.http.put(&format!("/admin/reviews/{id}"), payload).await
    }

    pub async fn delete_review(&self, id: i64) -> ClientResult<()> {
        self.http.delete(&format!("/admin/reviews/{id}")).await
    }

    // ========== Logs ==========

    pub async fn list_logs(&self, page: u32, limit: u32) -> ClientResult<Paginated<LogEntry>> {
        self.http
            .get_query("/admin/logs", &[("page", page), ("limit", limit)])
            .await
    }

    pub async fn delete_log(&self, id: i64) -> ClientResult<()> {
        self.http.delete(&format!("/admin/logs/{id}")).await
    }

    // ========== Backup ==========

    pub async fn create_backup(&self) -> ClientResult<BackupResponse> {
        self.http.post_empty("/admin/backup").await
    }

    pub async fn backup_info(&self) -> ClientResult<BackupList> {
        self.http.get("/admin/backup/info").await
    }

    pub async fn delete_backup(&self, filename: &str) -> ClientResult<()> {
        self.http.delete(&format!("/admin/backup/{filename}")).await
    }

    pub async fn download_backup(&self, filename: &str) -> ClientResult<Bytes> {
        self.http
            .get_bytes(&format!("/admin/backup/download/{filename}"))
            .await
    }

    /// Upload a dump file and restore the database from it
    pub async fn restore_backup(
        &self,
        filename: &str,
        bytes: Vec<u8>,
    ) -> ClientResult<BackupResponse> {
        self.http
            .post_file("/admin/backup/restore", "file", filename, bytes)
            .await
    }
}
