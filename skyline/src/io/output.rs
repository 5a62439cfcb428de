use cutlist::io::ext_repr::{ExtInstance, ExtSolution};
use serde::{Deserialize, Serialize};

use crate::config::SkylineConfig;

#[derive(Serialize, Deserialize, Clone)]
pub struct NestOutput {
    #[serde(flatten)]
    pub instance: ExtInstance,
    pub solution: ExtSolution,
    pub config: SkylineConfig,
}
