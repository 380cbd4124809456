//! 测试辅助模块
//!
//! 提供 mock 实现和便捷的测试工厂方法。

use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use humble_heroes_client::{ClientError, NewSuperhero, Superhero, SuperheroApi};
use tokio::sync::RwLock;

// ===== MockSuperheroApi =====

/// In-memory API. Created heroes are appended to the list with ids `gen-N`.
pub struct MockSuperheroApi {
    records: RwLock<Vec<Superhero>>,
    created: RwLock<Vec<NewSuperhero>>,
    /// 如果 true，list 返回网络错误
    fail_list: RwLock<bool>,
    /// 如果 true，create 返回 HTTP 500
    fail_create: RwLock<bool>,
    list_calls: AtomicUsize,
    create_calls: AtomicUsize,
}

impl MockSuperheroApi {
    pub fn new() -> Self {
        Self::with_records(Vec::new())
    }

    pub fn with_records(records: Vec<Superhero>) -> Self {
        Self {
            records: RwLock::new(records),
            created: RwLock::new(Vec::new()),
            fail_list: RwLock::new(false),
            fail_create: RwLock::new(false),
            list_calls: AtomicUsize::new(0),
            create_calls: AtomicUsize::new(0),
        }
    }

    pub async fn fail_list(&self, fail: bool) {
        *self.fail_list.write().await = fail;
    }

    pub async fn fail_create(&self, fail: bool) {
        *self.fail_create.write().await = fail;
    }

    pub async fn created(&self) -> Vec<NewSuperhero> {
        self.created.read().await.clone()
    }

    pub fn list_calls(&self) -> usize {
        self.list_calls.load(Ordering::SeqCst)
    }

    pub fn create_calls(&self) -> usize {
        self.create_calls.load(Ordering::SeqCst)
    }

    /// Total network calls of either kind.
    pub fn calls(&self) -> usize {
        self.list_calls() + self.create_calls()
    }
}

#[async_trait]
impl SuperheroApi for MockSuperheroApi {
    async fn list_superheroes(&self) -> humble_heroes_client::Result<Vec<Superhero>> {
        self.list_calls.fetch_add(1, Ordering::SeqCst);
        if *self.fail_list.read().await {
            return Err(ClientError::NetworkError {
                operation: "list".to_string(),
                detail: "connection refused".to_string(),
            });
        }
        Ok(self.records.read().await.clone())
    }

    async fn create_superhero(&self, hero: &NewSuperhero) -> humble_heroes_client::Result<()> {
        self.create_calls.fetch_add(1, Ordering::SeqCst);
        if *self.fail_create.read().await {
            return Err(ClientError::HttpStatus {
                operation: "create".to_string(),
                status: 500,
                raw_message: None,
            });
        }
        self.created.write().await.push(hero.clone());

        let mut records = self.records.write().await;
        let id = format!("gen-{}", records.len() + 1);
        records.push(Superhero {
            id,
            name: hero.name.clone(),
            superpower: hero.superpower.clone(),
            humility_score: hero.humility_score,
        });
        Ok(())
    }
}

// ===== 工厂方法 =====

pub fn sample_hero(id: &str, name: &str) -> Superhero {
    Superhero {
        id: id.to_string(),
        name: name.to_string(),
        superpower: "flight".to_string(),
        humility_score: 9,
    }
}
