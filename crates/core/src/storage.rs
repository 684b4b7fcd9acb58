//! Postgres storage layer.
//!
//! Thin wrapper over the connection pool; one method per operation the
//! API exposes. Section and image upserts are last-write-wins on their
//! unique keys, refreshing `updated_at` on every write.

use sqlx::PgPool;

use crate::content::model::{
    ContentRecord, Inquiry, NewInquiry, NewPost, NewSiteImage, Post, SiteImage, UpsertContent,
};

#[derive(Debug, Clone)]
pub struct Storage {
    pool: PgPool,
}

impl Storage {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    // ── Inquiries ──

    pub async fn create_inquiry(&self, input: &NewInquiry) -> Result<Inquiry, sqlx::Error> {
        sqlx::query_as::<_, Inquiry>(
            "INSERT INTO inquiries (event_type, location, date, name, email, phone) \
             VALUES ($1, $2, $3, $4, $5, $6) \
             RETURNING id, event_type, location, date, name, email, phone, created_at",
        )
        .bind(&input.event_type)
        .bind(&input.location)
        .bind(&input.date)
        .bind(&input.name)
        .bind(&input.email)
        .bind(&input.phone)
        .fetch_one(&self.pool)
        .await
    }

    /// All inquiries, oldest first. Presentation layers may reverse.
    pub async fn list_inquiries(&self) -> Result<Vec<Inquiry>, sqlx::Error> {
        sqlx::query_as::<_, Inquiry>(
            "SELECT id, event_type, location, date, name, email, phone, created_at \
             FROM inquiries ORDER BY created_at, id",
        )
        .fetch_all(&self.pool)
        .await
    }

    // ── Content records ──
    //
    // Two keyspaces with identical shape: `corporate_content` holds the
    // event-page sections (namespaced keys plus pre-namespacing legacy
    // bare keys), `site_content` is the generic site-wide keyspace.

    pub async fn list_corporate_content(&self) -> Result<Vec<ContentRecord>, sqlx::Error> {
        sqlx::query_as::<_, ContentRecord>(
            "SELECT id, section_key, content, updated_at FROM corporate_content",
        )
        .fetch_all(&self.pool)
        .await
    }

    pub async fn upsert_corporate_content(
        &self,
        input: &UpsertContent,
    ) -> Result<ContentRecord, sqlx::Error> {
        sqlx::query_as::<_, ContentRecord>(
            "INSERT INTO corporate_content (section_key, content, updated_at) \
             VALUES ($1, $2, now()) \
             ON CONFLICT (section_key) \
             DO UPDATE SET content = EXCLUDED.content, updated_at = now() \
             RETURNING id, section_key, content, updated_at",
        )
        .bind(&input.section_key)
        .bind(&input.content)
        .fetch_one(&self.pool)
        .await
    }

    pub async fn list_site_content(&self) -> Result<Vec<ContentRecord>, sqlx::Error> {
        sqlx::query_as::<_, ContentRecord>(
            "SELECT id, section_key, content, updated_at FROM site_content",
        )
        .fetch_all(&self.pool)
        .await
    }

    pub async fn upsert_site_content(
        &self,
        input: &UpsertContent,
    ) -> Result<ContentRecord, sqlx::Error> {
        sqlx::query_as::<_, ContentRecord>(
            "INSERT INTO site_content (section_key, content, updated_at) \
             VALUES ($1, $2, now()) \
             ON CONFLICT (section_key) \
             DO UPDATE SET content = EXCLUDED.content, updated_at = now() \
             RETURNING id, section_key, content, updated_at",
        )
        .bind(&input.section_key)
        .bind(&input.content)
        .fetch_one(&self.pool)
        .await
    }

    // ── Site images ──

    pub async fn list_site_images(&self) -> Result<Vec<SiteImage>, sqlx::Error> {
        sqlx::query_as::<_, SiteImage>(
            "SELECT id, image_key, url, original_name, updated_at FROM site_images",
        )
        .fetch_all(&self.pool)
        .await
    }

    pub async fn get_site_image(&self, image_key: &str) -> Result<Option<SiteImage>, sqlx::Error> {
        sqlx::query_as::<_, SiteImage>(
            "SELECT id, image_key, url, original_name, updated_at \
             FROM site_images WHERE image_key = $1",
        )
        .bind(image_key)
        .fetch_optional(&self.pool)
        .await
    }

    pub async fn upsert_site_image(
        &self,
        input: &NewSiteImage,
    ) -> Result<SiteImage, sqlx::Error> {
        sqlx::query_as::<_, SiteImage>(
            "INSERT INTO site_images (image_key, url, original_name, updated_at) \
             VALUES ($1, $2, $3, now()) \
             ON CONFLICT (image_key) \
             DO UPDATE SET url = EXCLUDED.url, original_name = EXCLUDED.original_name, \
                           updated_at = now() \
             RETURNING id, image_key, url, original_name, updated_at",
        )
        .bind(&input.image_key)
        .bind(&input.url)
        .bind(&input.original_name)
        .fetch_one(&self.pool)
        .await
    }

    pub async fn delete_site_image(&self, image_key: &str) -> Result<(), sqlx::Error> {
        sqlx::query("DELETE FROM site_images WHERE image_key = $1")
            .bind(image_key)
            .execute(&self.pool)
            .await?;
        Ok(())
    }

    // ── Posts ──

    pub async fn list_posts(&self) -> Result<Vec<Post>, sqlx::Error> {
        sqlx::query_as::<_, Post>(
            "SELECT id, location, title, category, image_url, content, created_at FROM posts",
        )
        .fetch_all(&self.pool)
        .await
    }

    pub async fn create_post(&self, input: &NewPost) -> Result<Post, sqlx::Error> {
        sqlx::query_as::<_, Post>(
            "INSERT INTO posts (location, title, category, content) \
             VALUES ($1, $2, $3, $4) \
             RETURNING id, location, title, category, image_url, content, created_at",
        )
        .bind(&input.location)
        .bind(&input.title)
        .bind(&input.category)
        .bind(&input.content)
        .fetch_one(&self.pool)
        .await
    }

    /// Insert the starter location posts once, on an empty table.
    pub async fn seed_posts(&self) -> Result<(), sqlx::Error> {
        if !self.list_posts().await?.is_empty() {
            return Ok(());
        }

        let seeds = [
            NewPost {
                location: "DALLAS".to_string(),
                title: "Top 5 Rooftops for Events".to_string(),
                category: "Venues".to_string(),
                content: "Discover the best skyline views...".to_string(),
            },
            NewPost {
                location: "CHICAGO".to_string(),
                title: "Industrial Wedding Venues".to_string(),
                category: "Venues".to_string(),
                content: "Raw spaces for modern vibes...".to_string(),
            },
            NewPost {
                location: "DENVER".to_string(),
                title: "Underground Bass Clubs".to_string(),
                category: "Nightlife".to_string(),
                content: "Where the bass hits different...".to_string(),
            },
        ];
        for seed in &seeds {
            self.create_post(seed).await?;
        }
        tracing::info!(count = seeds.len(), "Seeded starter posts");
        Ok(())
    }
}
