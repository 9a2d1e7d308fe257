//! Config Schema - Assembles option groups and parses tokens into a record
//!
//! The schema is built by threading a `SchemaBuilder` through one
//! `register` call per group. Flag names must be unique across groups; a
//! clash is reported instead of letting one declaration shadow another.

use clap::{ArgAction, Command, FromArgMatches};
use std::collections::BTreeMap;
use std::ffi::OsString;
use tracing::debug;

use crate::defaults::{DefaultResolver, WorkingDir};
use crate::error::{Result, SchemaError};
use crate::groups::{
    CriteriaArgs, GeneralArgs, LoggingArgs, MiningArgs, NirArgs, OptionGroup, SamplingArgs,
    RECORD_GROUPS,
};
use crate::record::ConfigurationRecord;

/// Declaration summary of a single option.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OptionInfo {
    pub name: String,
    pub group: &'static str,
    pub help: String,
    /// Default values rendered as CLI tokens, lossily for non-UTF-8 paths.
    /// Empty for switches.
    pub defaults: Vec<String>,
    pub switch: bool,
    pub list: bool,
}

/// Collects option groups before the schema is finalized.
#[derive(Debug, Clone)]
pub struct SchemaBuilder {
    command: Command,
    owners: BTreeMap<String, &'static str>,
    groups: Vec<&'static str>,
}

impl Default for SchemaBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl SchemaBuilder {
    pub fn new() -> Self {
        let command = Command::new(env!("CARGO_PKG_NAME"))
            .version(env!("CARGO_PKG_VERSION"))
            .about("Training configuration for deep metric learning runs")
            .no_binary_name(true)
            .args_override_self(true);

        Self {
            command,
            owners: BTreeMap::new(),
            groups: Vec::new(),
        }
    }

    /// Adds the declarations of `G`.
    ///
    /// Fails with `SchemaError::DuplicateOption` if any of its flags is
    /// already owned by a registered group, including `G` itself.
    pub fn register<G: OptionGroup>(mut self) -> Result<Self> {
        let declared = G::augment_args(Command::new(G::NAME));

        let mut names = Vec::new();
        for arg in declared.get_arguments() {
            names.push(arg.get_id().as_str().to_string());
            if let Some(long) = arg.get_long() {
                if long != arg.get_id().as_str() {
                    names.push(long.to_string());
                }
            }
        }

        for name in &names {
            if let Some(&first) = self.owners.get(name) {
                return Err(SchemaError::DuplicateOption {
                    flag: name.clone(),
                    first,
                    second: G::NAME,
                });
            }
        }

        let count = declared.get_arguments().count();
        for name in names {
            self.owners.insert(name, G::NAME);
        }
        self.command = G::augment_args(self.command);
        self.groups.push(G::NAME);

        debug!("Registered option group '{}' ({} options)", G::NAME, count);
        Ok(self)
    }

    pub fn is_registered(&self, group: &str) -> bool {
        self.groups.iter().any(|g| *g == group)
    }

    /// Finalizes the schema, filling environment-dependent defaults from `resolver`.
    pub fn build(self, resolver: &dyn DefaultResolver) -> Result<ConfigSchema> {
        if let Some(missing) = RECORD_GROUPS.iter().find(|g| !self.is_registered(g)) {
            return Err(SchemaError::MissingGroup(*missing));
        }

        let source_path = resolver.source_path().into_os_string();
        let save_path = resolver.save_path().into_os_string();

        let command = self
            .command
            .mut_arg("source_path", |arg| arg.default_value(source_path))
            .mut_arg("save_path", |arg| arg.default_value(save_path));

        let options: Vec<OptionInfo> = command
            .get_arguments()
            .map(|arg| {
                let id = arg.get_id().as_str();
                OptionInfo {
                    name: arg.get_long().unwrap_or(id).to_string(),
                    group: self.owners.get(id).copied().unwrap_or_default(),
                    help: arg.get_help().map(ToString::to_string).unwrap_or_default(),
                    defaults: arg
                        .get_default_values()
                        .iter()
                        .map(|v| v.to_string_lossy().into_owned())
                        .collect(),
                    switch: matches!(arg.get_action(), ArgAction::SetTrue),
                    list: arg
                        .get_num_args()
                        .map_or(false, |range| range.max_values() > 1),
                }
            })
            .collect();

        debug!(
            "Schema built: {} options across {} groups",
            options.len(),
            self.groups.len()
        );

        Ok(ConfigSchema { command, options })
    }
}

/// The finalized set of recognized options.
#[derive(Debug, Clone)]
pub struct ConfigSchema {
    command: Command,
    options: Vec<OptionInfo>,
}

impl ConfigSchema {
    /// Registers every option group and resolves defaults with `resolver`.
    pub fn standard(resolver: &dyn DefaultResolver) -> Result<Self> {
        SchemaBuilder::new()
            .register::<GeneralArgs>()?
            .register::<LoggingArgs>()?
            .register::<NirArgs>()?
            .register::<CriteriaArgs>()?
            .register::<MiningArgs>()?
            .register::<SamplingArgs>()?
            .build(resolver)
    }

    /// Like [`ConfigSchema::standard`], with paths relative to the current directory.
    pub fn from_env() -> Result<Self> {
        let resolver = WorkingDir::from_process()?;
        Self::standard(&resolver)
    }

    pub fn options(&self) -> &[OptionInfo] {
        &self.options
    }

    pub fn option(&self, name: &str) -> Option<&OptionInfo> {
        self.options.iter().find(|o| o.name == name)
    }

    pub fn render_help(&self) -> String {
        self.command.clone().render_long_help().to_string()
    }

    /// Parses CLI tokens (without the program name) into a record.
    ///
    /// Options that are not mentioned keep their defaults. The first
    /// offending token aborts the parse; no partial record is returned.
    pub fn parse<I, T>(&self, tokens: I) -> Result<ConfigurationRecord>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        let matches = self.command.clone().try_get_matches_from(tokens)?;
        let record = ConfigurationRecord::from_arg_matches(&matches)?;
        debug!(
            "Parsed configuration: dataset={}, loss={}, batch_mining={}",
            record.general.dataset, record.general.loss, record.general.batch_mining
        );
        Ok(record)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Args;
    use std::collections::HashSet;

    /// A group that re-declares `--lr`.
    #[allow(dead_code)]
    #[derive(Args, Debug)]
    #[command(rename_all = "snake_case")]
    struct ShadowingArgs {
        #[arg(long, default_value_t = 0.1)]
        lr: f64,
    }

    impl OptionGroup for ShadowingArgs {
        const NAME: &'static str = "shadowing";
    }

    fn resolver() -> WorkingDir {
        WorkingDir::new("/runs")
    }

    #[test]
    fn test_collision_across_groups_is_rejected() {
        let err = SchemaBuilder::new()
            .register::<GeneralArgs>()
            .and_then(|b| b.register::<ShadowingArgs>())
            .unwrap_err();

        match err {
            SchemaError::DuplicateOption {
                flag,
                first,
                second,
            } => {
                assert_eq!(flag, "lr");
                assert_eq!(first, "general");
                assert_eq!(second, "shadowing");
            }
            other => panic!("Expected DuplicateOption, got {other:?}"),
        }
    }

    #[test]
    fn test_collision_is_order_independent() {
        let err = SchemaBuilder::new()
            .register::<ShadowingArgs>()
            .and_then(|b| b.register::<GeneralArgs>())
            .unwrap_err();
        assert!(matches!(
            err,
            SchemaError::DuplicateOption { first: "shadowing", second: "general", .. }
        ));
    }

    #[test]
    fn test_registering_a_group_twice_fails() {
        let err = SchemaBuilder::new()
            .register::<MiningArgs>()
            .and_then(|b| b.register::<MiningArgs>())
            .unwrap_err();
        assert!(matches!(err, SchemaError::DuplicateOption { .. }));
    }

    #[test]
    fn test_build_requires_every_group() {
        let err = SchemaBuilder::new()
            .register::<GeneralArgs>()
            .and_then(|b| b.register::<LoggingArgs>())
            .and_then(|b| b.build(&resolver()))
            .unwrap_err();
        assert!(matches!(err, SchemaError::MissingGroup("nir")));
    }

    #[test]
    fn test_registration_order_does_not_matter() -> Result<()> {
        let reversed = SchemaBuilder::new()
            .register::<SamplingArgs>()?
            .register::<MiningArgs>()?
            .register::<CriteriaArgs>()?
            .register::<NirArgs>()?
            .register::<LoggingArgs>()?
            .register::<GeneralArgs>()?
            .build(&resolver())?;
        let standard = ConfigSchema::standard(&resolver())?;

        assert_eq!(reversed.parse(Vec::<String>::new())?, standard.parse(Vec::<String>::new())?);

        let mut a: Vec<_> = reversed.options().iter().map(|o| o.name.clone()).collect();
        let mut b: Vec<_> = standard.options().iter().map(|o| o.name.clone()).collect();
        a.sort();
        b.sort();
        assert_eq!(a, b);
        Ok(())
    }

    #[test]
    fn test_option_names_are_unique() -> Result<()> {
        let schema = ConfigSchema::standard(&resolver())?;
        let names: HashSet<_> = schema.options().iter().map(|o| o.name.as_str()).collect();
        assert_eq!(names.len(), schema.options().len());
        assert_eq!(schema.options().len(), 81);
        Ok(())
    }

    #[test]
    fn test_option_info_shapes() -> Result<()> {
        let schema = ConfigSchema::standard(&resolver())?;

        let tau = schema.option("tau").expect("tau is declared");
        assert_eq!(tau.group, "general");
        assert!(tau.list);
        assert!(!tau.switch);
        assert_eq!(tau.defaults, vec!["10000"]);

        let log_online = schema.option("log_online").expect("log_online is declared");
        assert_eq!(log_online.group, "logging");
        assert!(log_online.switch);

        let save_path = schema.option("save_path").expect("save_path is declared");
        assert_eq!(save_path.defaults, vec!["/runs/Training_Results"]);
        assert!(!save_path.help.is_empty());
        Ok(())
    }

    #[cfg(unix)]
    #[test]
    fn test_non_utf8_resolver_paths_are_kept() -> Result<()> {
        use std::os::unix::ffi::OsStringExt;
        use std::path::PathBuf;

        let root = PathBuf::from(OsString::from_vec(b"/runs/caf\xe9".to_vec()));
        let record = ConfigSchema::standard(&WorkingDir::new(root.clone()))?
            .parse(Vec::<String>::new())?;
        assert_eq!(record.general.save_path, root.join("Training_Results"));
        assert_eq!(record.general.source_path, root.join("../../Datasets"));
        Ok(())
    }

    #[test]
    fn test_help_lists_snake_case_flags() -> Result<()> {
        let help = ConfigSchema::standard(&resolver())?.render_help();
        assert!(help.contains("--samples_per_class"));
        assert!(help.contains("--loss_nir_nf_fc_depth"));
        Ok(())
    }
}
