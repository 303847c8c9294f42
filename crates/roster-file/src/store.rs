//! Filesystem storage for records.
//!
//! Layout under the store root:
//!
//! ```text
//! root/
//!   store.lock          exclusive advisory lock, held while the store is open
//!   index.json          { "ids": [...], "names": {...} } in storage order
//!   records/<name>.json one snapshot per record
//! ```
//!
//! A record file is named by the hex of its id. Ids too long for that get a
//! generated name listed under `names`.

use std::fs::{self, File, OpenOptions};
use std::marker::PhantomData;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use fs2::FileExt;
use tokio::sync::RwLock;
use tracing::{debug, instrument, warn};

use roster_core::error::{NotFoundError, StorageError};
use roster_core::traits::{Props, Searchable, SearchableStore, Store};
use roster_core::{Entity, EntityId, Error, Result, SearchParams, SearchResult, search};

use crate::index::Index;
use crate::io::{map_io, read_json, remove_file, write_json_atomic};

/// Persistent store keeping one JSON file per record.
///
/// The id index lives in memory behind a read/write lock and is written
/// back after every mutation. Mutations hold the write lock from lookup to
/// the final write, and build the next index on a copy that replaces the
/// live one only once it is on disk.
#[derive(Debug)]
pub struct FileStore<P> {
    root: PathBuf,
    index: RwLock<Index>,
    _lock: File,
    _props: PhantomData<fn() -> P>,
}

impl<P: Props> FileStore<P> {
    /// Open (or create) a store rooted at `root`.
    ///
    /// Fails with [`StorageError::Locked`] if another handle holds the root.
    #[instrument(skip_all, fields(kind = P::KIND, root = %root.as_ref().display()))]
    pub fn open(root: impl AsRef<Path>) -> Result<Self> {
        let root = root.as_ref().to_path_buf();
        let records = root.join("records");
        fs::create_dir_all(&records).map_err(map_io(&records))?;

        let lock_path = root.join("store.lock");
        let lock = OpenOptions::new()
            .create(true)
            .write(true)
            .truncate(false)
            .open(&lock_path)
            .map_err(map_io(&lock_path))?;

        if let Err(err) = lock.try_lock_exclusive() {
            if err.kind() == fs2::lock_contended_error().kind() {
                return Err(Error::Storage(StorageError::Locked {
                    path: root.display().to_string(),
                }));
            }
            return Err(map_io(&lock_path)(err));
        }

        let index_path = root.join("index.json");
        let index = match read_json::<Index>(&index_path)? {
            Some(mut index) => {
                index.reindex();
                index
            }
            None => {
                let index = Index::default();
                write_json_atomic(&index_path, &index)?;
                index
            }
        };

        debug!(records = index.len(), "Opened file store");

        Ok(Self {
            root,
            index: RwLock::new(index),
            _lock: lock,
            _props: PhantomData,
        })
    }
}

impl<P> FileStore<P> {
    /// The root directory of the store.
    pub fn root(&self) -> &Path {
        &self.root
    }

    fn index_path(&self) -> PathBuf {
        self.root.join("index.json")
    }

    fn record_path(&self, index: &Index, id: &EntityId) -> PathBuf {
        self.root
            .join("records")
            .join(format!("{}.json", index.file_stem(id)))
    }
}

impl<P: Props> FileStore<P> {
    fn read_record(&self, index: &Index, id: &EntityId) -> Result<Entity<P>> {
        let path = self.record_path(index, id);
        match read_json::<Entity<P>>(&path)? {
            Some(entity) => Ok(entity),
            None => {
                warn!(id = %id, path = %path.display(), "Indexed record has no file");
                Err(Error::Storage(StorageError::Corrupt {
                    path: path.display().to_string(),
                    message: format!("record {id} is indexed but missing"),
                }))
            }
        }
    }

    fn read_all(&self, index: &Index) -> Result<Vec<Entity<P>>> {
        index
            .ids()
            .iter()
            .map(|id| self.read_record(index, id))
            .collect()
    }
}

#[async_trait]
impl<P: Props> Store for FileStore<P> {
    type Props = P;

    #[instrument(skip(self, entity), fields(kind = P::KIND, id = %entity.id()))]
    async fn insert(&self, entity: Entity<P>) -> Result<()> {
        let mut index = self.index.write().await;
        if index.contains(entity.id()) {
            write_json_atomic(&self.record_path(&index, entity.id()), &entity)?;
            debug!("Overwrote record with existing id");
            return Ok(());
        }

        let mut next = index.clone();
        next.push(entity.id().clone());
        let path = self.record_path(&next, entity.id());
        write_json_atomic(&path, &entity)?;

        if let Err(err) = write_json_atomic(&self.index_path(), &next) {
            if let Err(cleanup) = remove_file(&path) {
                warn!(error = %cleanup, path = %path.display(), "Left unindexed record file behind");
            }
            return Err(err);
        }

        *index = next;
        debug!(records = index.len(), "Inserted record");
        Ok(())
    }

    #[instrument(skip(self), fields(kind = P::KIND))]
    async fn find_by_id(&self, id: &EntityId) -> Result<Entity<P>> {
        let index = self.index.read().await;
        if !index.contains(id) {
            return Err(NotFoundError::of::<P>(id).into());
        }
        self.read_record(&index, id)
    }

    #[instrument(skip(self), fields(kind = P::KIND))]
    async fn find_all(&self) -> Result<Vec<Entity<P>>> {
        let index = self.index.read().await;
        self.read_all(&index)
    }

    #[instrument(skip(self, entity), fields(kind = P::KIND, id = %entity.id()))]
    async fn update(&self, entity: Entity<P>) -> Result<()> {
        let index = self.index.write().await;
        if !index.contains(entity.id()) {
            return Err(NotFoundError::of::<P>(entity.id()).into());
        }
        write_json_atomic(&self.record_path(&index, entity.id()), &entity)?;
        debug!("Updated record");
        Ok(())
    }

    #[instrument(skip(self), fields(kind = P::KIND))]
    async fn delete(&self, id: &EntityId) -> Result<()> {
        let mut index = self.index.write().await;
        let path = self.record_path(&index, id);
        let mut next = index.clone();
        let pos = next
            .remove(id)
            .ok_or_else(|| NotFoundError::of::<P>(id))?;

        write_json_atomic(&self.index_path(), &next)?;
        *index = next;

        // Unreachable once the index is written.
        if let Err(err) = remove_file(&path) {
            warn!(error = %err, path = %path.display(), "Left deleted record file behind");
        }
        debug!(position = pos, records = index.len(), "Deleted record");
        Ok(())
    }
}

#[async_trait]
impl<P: Searchable> SearchableStore for FileStore<P> {
    #[instrument(skip(self, params), fields(kind = P::KIND, page = params.page()))]
    async fn search(&self, params: &SearchParams) -> Result<SearchResult<Entity<P>>> {
        let entities = {
            let index = self.index.read().await;
            self.read_all(&index)?
        };
        let result = search::run(entities, params);
        debug!(total = result.total(), returned = result.items().len(), "Searched records");
        Ok(result)
    }
}
