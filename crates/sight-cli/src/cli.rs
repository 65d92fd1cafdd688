//! Command-line arguments and feature selection.

use std::ffi::OsString;
use std::path::PathBuf;

use clap::{ArgAction, CommandFactory, Parser};
use sight_models::{DetectionFeature, LanguageHints};
use tracing::warn;

/// Annotate local images with Google Cloud Vision and print the JSON result.
///
/// Long flags may be written with one dash (`-face`, `-lang en,it`) or two.
#[derive(Parser, Debug, Default)]
#[command(name = "sightline", version)]
pub struct Cli {
    /// Face detection
    #[arg(long)]
    pub face: bool,

    /// Landmark detection
    #[arg(long)]
    pub landmark: bool,

    /// Logo detection
    #[arg(long)]
    pub logo: bool,

    /// Label detection
    #[arg(long)]
    pub label: bool,

    /// Text detection (OCR)
    #[arg(long)]
    pub text: bool,

    /// Document text detection (dense OCR)
    #[arg(long)]
    pub doc: bool,

    /// Safe-search detection
    #[arg(long)]
    pub safe_search: bool,

    /// Image properties (dominant colors)
    #[arg(long)]
    pub image_properties: bool,

    /// Language hints for -text and -doc, comma separated (e.g. "en,it")
    #[arg(long, value_name = "CODES", default_value = "")]
    pub lang: String,

    /// Service account key file (defaults to $GOOGLE_APPLICATION_CREDENTIALS)
    #[arg(long, value_name = "PATH")]
    pub credentials: Option<String>,

    /// Vision API base URL (defaults to $VISION_API_ENDPOINT)
    #[arg(long, value_name = "URL")]
    pub endpoint: Option<String>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,

    /// Image files to annotate
    #[arg(value_name = "IMAGE")]
    pub images: Vec<PathBuf>,
}

impl Cli {
    /// Parse from raw process arguments, accepting single-dash long flags.
    pub fn try_parse_args<I, T>(args: I) -> Result<Self, clap::Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString>,
    {
        Self::try_parse_from(normalize_args(args))
    }

    /// Usage text printed when no image is given.
    pub fn usage() -> String {
        Self::command().render_help().to_string()
    }

    pub fn feature_flags(&self) -> FeatureFlags {
        FeatureFlags {
            face: self.face,
            landmark: self.landmark,
            logo: self.logo,
            label: self.label,
            text: self.text,
            doc: self.doc,
            safe_search: self.safe_search,
            image_properties: self.image_properties,
        }
    }

    /// Selected feature; conflicting flags resolve by precedence.
    pub fn feature(&self) -> DetectionFeature {
        let flags = self.feature_flags();
        let set = flags.set_flags();
        let feature = flags.select();
        if set.len() > 1 {
            warn!(
                selected = %feature,
                ignored = ?&set[1..],
                "Multiple feature flags given; using the highest-precedence one"
            );
        }
        feature
    }

    /// Language hints for the selected feature; empty unless it is an OCR feature.
    pub fn language_hints(&self) -> LanguageHints {
        let hints = LanguageHints::parse_list(&self.lang);
        let feature = self.feature_flags().select();
        if !hints.is_empty() && !feature.supports_language_hints() {
            warn!(lang = %hints, feature = %feature, "Ignoring -lang: only -text and -doc use language hints");
        }
        hints.for_feature(feature)
    }
}

/// Rewrite `-flag` / `-flag=value` to `--flag` / `--flag=value` for every
/// long option the parser knows. Anything after `--` is left alone, as are
/// short flags such as `-v`, `-vv` and `-h`.
pub fn normalize_args<I, T>(args: I) -> Vec<OsString>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    let command = Cli::command();
    let long_names: Vec<String> = command
        .get_arguments()
        .filter_map(|a| a.get_long().map(str::to_string))
        .chain(["help".to_string(), "version".to_string()])
        .collect();

    let mut passthrough = false;
    args.into_iter()
        .map(Into::into)
        .map(|arg: OsString| {
            if passthrough {
                return arg;
            }
            let Some(s) = arg.to_str() else {
                return arg;
            };
            if s == "--" {
                passthrough = true;
                return arg;
            }
            match s.strip_prefix('-') {
                Some(rest) if !rest.starts_with('-') => {
                    let name = rest.split('=').next().unwrap_or(rest);
                    if long_names.iter().any(|n| n == name) {
                        OsString::from(format!("-{}", s))
                    } else {
                        arg
                    }
                }
                _ => arg,
            }
        })
        .collect()
}

/// The eight feature flags, as given on the command line.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FeatureFlags {
    pub face: bool,
    pub landmark: bool,
    pub logo: bool,
    pub label: bool,
    pub text: bool,
    pub doc: bool,
    pub safe_search: bool,
    pub image_properties: bool,
}

impl FeatureFlags {
    fn in_precedence_order(&self) -> [(bool, DetectionFeature); 8] {
        [
            (self.face, DetectionFeature::Face),
            (self.landmark, DetectionFeature::Landmark),
            (self.logo, DetectionFeature::Logo),
            (self.label, DetectionFeature::Label),
            (self.text, DetectionFeature::Text),
            (self.doc, DetectionFeature::DocumentText),
            (self.safe_search, DetectionFeature::SafeSearch),
            (self.image_properties, DetectionFeature::ImageProperties),
        ]
    }

    /// First set flag in precedence order
    /// (face > landmark > logo > label > text > doc > safe-search > image-properties),
    /// or `Unspecified` when none is set.
    pub fn select(&self) -> DetectionFeature {
        self.in_precedence_order()
            .into_iter()
            .find(|(set, _)| *set)
            .map(|(_, feature)| feature)
            .unwrap_or(DetectionFeature::Unspecified)
    }

    /// Features whose flag is set, highest precedence first.
    pub fn set_flags(&self) -> Vec<DetectionFeature> {
        self.in_precedence_order()
            .into_iter()
            .filter(|(set, _)| *set)
            .map(|(_, feature)| feature)
            .collect()
    }

    /// Flags with exactly `feature` set.
    pub fn only(feature: DetectionFeature) -> Self {
        let mut flags = Self::default();
        match feature {
            DetectionFeature::Unspecified => {}
            DetectionFeature::Face => flags.face = true,
            DetectionFeature::Landmark => flags.landmark = true,
            DetectionFeature::Logo => flags.logo = true,
            DetectionFeature::Label => flags.label = true,
            DetectionFeature::Text => flags.text = true,
            DetectionFeature::DocumentText => flags.doc = true,
            DetectionFeature::SafeSearch => flags.safe_search = true,
            DetectionFeature::ImageProperties => flags.image_properties = true,
        }
        flags
    }
}
