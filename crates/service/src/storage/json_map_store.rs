use std::{collections::HashMap, hash::Hash, path::PathBuf, sync::Arc};
use tokio::{fs, sync::RwLock};

use crate::errors::ServiceError;

/// Generic JSON file-backed key-value map store.
///
/// Persists a `HashMap<K, V>` to a JSON file. Mutations run on a copy that replaces the
/// live map only after the file was rewritten, all under the write lock.
pub struct JsonMapStore<K, V> {
    inner: RwLock<HashMap<K, V>>,
    file_path: PathBuf,
}

impl<K, V> JsonMapStore<K, V>
where
    K: Eq + Hash + serde::Serialize + serde::de::DeserializeOwned + Clone,
    V: serde::Serialize + serde::de::DeserializeOwned + Clone,
{
    /// Initialize the store from a path. Creates the file with an empty map if missing.
    /// An existing file that does not parse is an error, never silently emptied.
    pub async fn new<P: Into<PathBuf>>(path: P) -> Result<Arc<Self>, ServiceError> {
        let file_path = path.into();
        if let Some(parent) = file_path.parent() {
            fs::create_dir_all(parent).await.map_err(ServiceError::storage)?;
        }

        let map: HashMap<K, V> = match fs::read(&file_path).await {
            Ok(bytes) if bytes.is_empty() => HashMap::new(),
            Ok(bytes) => serde_json::from_slice(&bytes).map_err(|e| {
                ServiceError::Storage(format!("{}: {e}", file_path.display()))
            })?,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                let empty: HashMap<K, V> = HashMap::new();
                Self::write(&file_path, &empty).await?;
                empty
            }
            Err(e) => return Err(ServiceError::storage(e)),
        };

        Ok(Arc::new(Self { inner: RwLock::new(map), file_path }))
    }

    async fn write(path: &PathBuf, map: &HashMap<K, V>) -> Result<(), ServiceError> {
        let data = serde_json::to_vec(map).map_err(ServiceError::storage)?;
        fs::write(path, data).await.map_err(ServiceError::storage)
    }

    /// All values, in arbitrary order.
    pub async fn values(&self) -> Vec<V> {
        let map = self.inner.read().await;
        map.values().cloned().collect()
    }

    /// Get value by key.
    pub async fn get(&self, key: &K) -> Option<V> {
        let map = self.inner.read().await;
        map.get(key).cloned()
    }

    pub async fn len(&self) -> usize {
        self.inner.read().await.len()
    }

    #[cfg(test)]
    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }

    /// Values matching `pred`, in arbitrary order.
    pub async fn filter<F>(&self, pred: F) -> Vec<V>
    where
        F: Fn(&V) -> bool,
    {
        let map = self.inner.read().await;
        map.values().filter(|v| pred(v)).cloned().collect()
    }

    /// Apply a mutation and persist it. When `f` or the write fails, neither the file
    /// nor the in-memory map change.
    pub async fn update_map<F, T>(&self, f: F) -> Result<T, ServiceError>
    where
        F: FnOnce(&mut HashMap<K, V>) -> Result<T, ServiceError>,
    {
        let mut map = self.inner.write().await;
        let mut next = map.clone();
        let out = f(&mut next)?;
        Self::write(&self.file_path, &next).await?;
        *map = next;
        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn json_map_store_persists_and_reloads() -> Result<(), anyhow::Error> {
        let tmp = std::env::temp_dir().join(format!("json_map_store_{}.json", uuid::Uuid::new_v4()));
        let store = JsonMapStore::<i64, String>::new(&tmp).await?;

        assert!(store.is_empty().await);

        store.update_map(|m| { m.insert(1, "a".into()); m.insert(2, "b".into()); Ok(()) }).await?;
        assert_eq!(store.get(&1).await.as_deref(), Some("a"));
        assert_eq!(store.len().await, 2);
        assert_eq!(store.filter(|v| v == "b").await, vec!["b".to_string()]);

        let reloaded = JsonMapStore::<i64, String>::new(&tmp).await?;
        let mut values = reloaded.values().await;
        values.sort();
        assert_eq!(values, vec!["a".to_string(), "b".to_string()]);

        let _ = tokio::fs::remove_file(&tmp).await;
        Ok(())
    }

    #[tokio::test]
    async fn failed_mutation_is_not_persisted() -> Result<(), anyhow::Error> {
        let tmp = std::env::temp_dir().join(format!("json_map_store_{}.json", uuid::Uuid::new_v4()));
        let store = JsonMapStore::<i64, String>::new(&tmp).await?;

        let res: Result<(), _> = store
            .update_map(|m| {
                m.insert(7, "x".into());
                Err(ServiceError::validation("nope"))
            })
            .await;
        assert!(res.is_err());
        assert!(store.get(&7).await.is_none());

        let reloaded = JsonMapStore::<i64, String>::new(&tmp).await?;
        assert!(reloaded.is_empty().await);

        let _ = tokio::fs::remove_file(&tmp).await;
        Ok(())
    }

    #[tokio::test]
    async fn corrupt_file_is_an_error() -> Result<(), anyhow::Error> {
        let tmp = std::env::temp_dir().join(format!("json_map_store_{}.json", uuid::Uuid::new_v4()));
        tokio::fs::write(&tmp, b"{not json").await?;
        assert!(JsonMapStore::<i64, String>::new(&tmp).await.is_err());
        let _ = tokio::fs::remove_file(&tmp).await;
        Ok(())
    }
}
