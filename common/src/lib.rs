//! CPN Common Library
//!
//! CLIとテストで共有される型と純粋ロジック（I/Oなし）:
//! - Réf. interne の8桁検証
//! - Réf. interne × Réf. client の直積（PF）
//! - DFRX / AFRX のファイル名・確認テキスト生成

pub mod types;
pub mod error;
pub mod validator;
pub mod cross_join;
pub mod naming;
pub mod pipeline;

pub use types::{Cell, InvalidRow, PairingRow, Table};
pub use error::{Error, Result};
pub use validator::{find_invalid, invalid_mask, is_valid_internal_ref, validate_internal_column};
pub use cross_join::{cross_join, reference_list};
pub use naming::{date_stamp, ArtifactNames};
pub use pipeline::{build_cpn, CpnOutput, CpnRequest};
