use std::path::{Path, PathBuf};
use std::str::FromStr;

use serde::Serialize;
use thiserror::Error;
use tracing::debug;

use docreads_compute::pipeline::also_likes::liked_documents;
use docreads_compute::pipeline::counts::value_counts;
use docreads_compute::{AnalysisSession, DocumentPopularity};
use docreads_core::{Config, DocReadsError, EntityType};
use docreads_graph::to_dot;
use docreads_store::{EventStore, MalformedPolicy};

use crate::cli::{CliArgs, RankingArg};

/// Rejections raised before any data is loaded.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TaskError {
    #[error("Invalid file format. Only .json files are allowed.")]
    InvalidFileFormat,

    #[error("Invalid or no task ID given. Please use -h for more help.")]
    InvalidTask,

    #[error("No document uuid provided. Please use -h for more help.")]
    MissingDocument,

    #[error("File does not exist: {0}")]
    FileNotFound(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskId {
    /// 2a
    Countries,
    /// 2b
    Continents,
    /// 3a
    UserAgents,
    /// 3b
    Browsers,
    /// 4
    TopReaders,
    /// 5
    AlsoLikes,
    /// 6
    AlsoLikesGraph,
}

impl TaskId {
    pub fn needs_document(self) -> bool {
        matches!(
            self,
            Self::Countries | Self::Continents | Self::AlsoLikes | Self::AlsoLikesGraph
        )
    }
}

impl FromStr for TaskId {
    type Err = TaskError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "2a" => Ok(Self::Countries),
            "2b" => Ok(Self::Continents),
            "3a" => Ok(Self::UserAgents),
            "3b" => Ok(Self::Browsers),
            "4" => Ok(Self::TopReaders),
            "5" => Ok(Self::AlsoLikes),
            "6" => Ok(Self::AlsoLikesGraph),
            _ => Err(TaskError::InvalidTask),
        }
    }
}

/// A validated invocation: every field the chosen task needs is present.
#[derive(Debug, Clone)]
pub struct TaskRequest {
    pub file: PathBuf,
    pub task: TaskId,
    pub document: Option<String>,
    pub visitor: Option<String>,
    pub limit: usize,
    pub policy: MalformedPolicy,
    pub ranking: RankingArg,
}

impl TaskRequest {
    /// Checks run in order: file format, task, document, file exists.
    /// Command-line values win over config.
    pub fn from_args(args: &CliArgs, config: &Config) -> Result<Self, TaskError> {
        let file = args
            .file
            .clone()
            .or_else(|| config.data.data_file.clone())
            .filter(|p| has_json_extension(p))
            .ok_or(TaskError::InvalidFileFormat)?;

        let task: TaskId = args.task.as_deref().ok_or(TaskError::InvalidTask)?.parse()?;

        let document = args.document.clone().filter(|d| !d.trim().is_empty());
        if task.needs_document() && document.is_none() {
            return Err(TaskError::MissingDocument);
        }

        if !file.is_file() {
            return Err(TaskError::FileNotFound(file.display().to_string()));
        }

        let default_limit = match task {
            TaskId::AlsoLikes | TaskId::AlsoLikesGraph => config.queries.also_likes,
            _ => config.queries.top_readers,
        };

        Ok(Self {
            file,
            task,
            document,
            visitor: args.visitor.clone(),
            limit: args.limit.unwrap_or(default_limit),
            policy: MalformedPolicy::from_skip_flag(args.skip_malformed || config.data.skip_malformed),
            ranking: args.ranking,
        })
    }

    fn document_id(&self) -> &str {
        self.document.as_deref().unwrap_or_default()
    }
}

fn has_json_extension(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case("json"))
}

// ── Results ───────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LabelCount {
    pub label: String,
    pub count: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReaderTotal {
    pub visitor_id: String,
    pub read_time: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LikedPair {
    pub visitor_id: String,
    pub document_id: String,
    pub count: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum TaskOutput {
    Counts {
        title: String,
        rows: Vec<LabelCount>,
    },
    Readers {
        readers: Vec<ReaderTotal>,
    },
    Likes {
        document_id: String,
        strategy: String,
        pairs: Vec<LikedPair>,
        documents: Vec<String>,
    },
    Graph {
        document_id: String,
        node_count: usize,
        edge_count: usize,
        visitor_count: usize,
        document_count: usize,
        dot: String,
    },
}

fn counts(title: impl Into<String>, rows: Vec<(String, usize)>) -> TaskOutput {
    TaskOutput::Counts {
        title: title.into(),
        rows: rows
            .into_iter()
            .map(|(label, count)| LabelCount { label, count })
            .collect(),
    }
}

/// Run one task against a loaded store.
pub fn execute(store: &EventStore, request: &TaskRequest) -> Result<TaskOutput, DocReadsError> {
    let mut session = match request.ranking {
        RankingArg::PairCount => AnalysisSession::new(store),
        RankingArg::DocumentPopularity => AnalysisSession::new(store).with_ranking(DocumentPopularity),
    };
    let document_id = request.document_id();
    let exclude = request.visitor.as_deref();

    debug!(task = ?request.task, document = document_id, limit = request.limit, "Running task");

    let output = match request.task {
        TaskId::Countries => {
            let names = session.countries_for_document(document_id)?;
            counts(format!("Countries of readers of {document_id}"), value_counts(names))
        }
        TaskId::Continents => {
            session.countries_for_document(document_id)?;
            let continents = session.continents_for_last_query()?;
            counts(format!("Continents of readers of {document_id}"), value_counts(continents))
        }
        TaskId::UserAgents => counts("User agents", value_counts(session.browser_agents_raw())),
        TaskId::Browsers => counts("Browsers", value_counts(session.browser_names())),
        TaskId::TopReaders => TaskOutput::Readers {
            readers: session
                .top_readers(request.limit)
                .into_iter()
                .map(|(visitor_id, read_time)| ReaderTotal { visitor_id, read_time })
                .collect(),
        },
        TaskId::AlsoLikes => {
            let ranked = session.top_likes(document_id, exclude, request.limit);
            TaskOutput::Likes {
                document_id: document_id.to_string(),
                strategy: session.ranking_name().to_string(),
                documents: liked_documents(&ranked),
                pairs: ranked
                    .into_iter()
                    .map(|(pair, count)| LikedPair {
                        visitor_id: pair.visitor_id,
                        document_id: pair.document_id,
                        count,
                    })
                    .collect(),
            }
        }
        TaskId::AlsoLikesGraph => {
            let graph = session.also_likes_graph(document_id, exclude, request.limit);
            let stats = graph.stats();
            let by_type = |entity: EntityType| {
                stats.nodes_by_type.get(&entity.to_string()).copied().unwrap_or(0)
            };
            TaskOutput::Graph {
                document_id: document_id.to_string(),
                node_count: stats.node_count,
                edge_count: stats.edge_count,
                visitor_count: by_type(EntityType::Visitor),
                document_count: by_type(EntityType::Document),
                dot: to_dot(&graph),
            }
        }
    };
    Ok(output)
}
