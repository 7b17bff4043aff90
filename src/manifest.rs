use crate::{
    config::{Config, LATEST},
    vfs::VirtualFS,
};
use indexmap::IndexMap;
use miette::Diagnostic;
use serde::Serialize;
use thiserror::Error;

/// Version written into `info.json` when the platform version resolves to the
/// [`LATEST`] sentinel.
pub const DEFAULT_FACTORIO_VERSION: &str = "1.1.77";

lazy_static::lazy_static! {
    /// Packages installed into every generated project, independent of
    /// configuration. Order is the order they are passed to the installer.
    pub static ref DEV_DEPENDENCIES: IndexMap<&'static str, &'static str> = IndexMap::from([
        ("gulp", LATEST),
        ("gulp-rename", LATEST),
        ("gulp-zip", LATEST),
        ("lua-types", LATEST),
        ("npm-run-all", LATEST),
        ("typed-factorio", LATEST),
        ("typescript", LATEST),
        ("typescript-to-lua", LATEST),
        ("yargs", LATEST),
    ]);
}

#[derive(Debug, Error, Diagnostic)]
pub enum ManifestError {
    #[error("unable to serialize '{file}'")]
    #[diagnostic(code(fabrika::manifest::serialize))]
    Serialize {
        file: &'static str,
        #[source]
        source: serde_json::Error,
    },
}

#[derive(Debug, Serialize)]
struct PackageJson {
    name: String,
    license: &'static str,
    #[serde(rename = "devDependencies")]
    dev_dependencies: IndexMap<String, String>,
    scripts: IndexMap<&'static str, &'static str>,
}
impl PackageJson {
    fn for_project(config: &Config) -> Self {
        // Two parallel script families so the generated project builds on
        // either OS family without regeneration.
        let scripts = IndexMap::from([
            ("copy:infoJSON:windows", r"xcopy /Y /S /I src\info.json build\"),
            ("copy:campaigns:windows", r"xcopy /Y /S /I src\campaigns build\campaigns"),
            ("copy:locale:windows", r"xcopy /Y /S /I src\locale build\locale"),
            ("copy:migrations:windows", r"xcopy /Y /S /I src\migrations build\migrations"),
            ("copy:scenarios:windows", r"xcopy /Y /S /I src\scenarios build\scenarios"),
            ("copy:tutorials:windows", r"xcopy /Y /S /I src\tutorials build\tutorials"),
            ("clean:windows", "(IF EXIST build rd /s /q build) && (IF EXIST deployment rd /s /q deployment) && exit 0"),
            ("deploy_windows", "yarn clean:windows && yarn build && yarn copy:infoJSON:windows && yarn copy:campaigns:windows && yarn copy:locale:windows && yarn copy:migrations:windows && yarn copy:scenarios:windows && yarn copy:tutorials:windows && gulp compress"),
            ("copy:infoJSON:unix", "cp -R src/info.json build/"),
            ("copy:campaigns:unix", "mkdir -p build/campaigns && cp -R src/campaigns/* build/campaigns/"),
            ("copy:locale:unix", "mkdir -p build/locale && cp -R src/locale/* build/locale/"),
            ("copy:migrations:unix", "mkdir -p build/migrations && cp -R src/migrations/* build/migrations/"),
            ("copy:scenarios:unix", "mkdir -p build/scenarios && cp -R src/scenarios/* build/scenarios/"),
            ("copy:tutorials:unix", "mkdir -p build/tutorials && cp -R src/tutorials/* build/tutorials/"),
            ("clean:unix", "rm -rf build/ deployment/"),
            ("deploy_unix", "yarn clean:unix && yarn build && yarn copy:infoJSON:unix && yarn copy:campaigns:unix && yarn copy:locale:unix && yarn copy:migrations:unix && yarn copy:scenarios:unix && yarn copy:tutorials:unix && gulp compress"),
            ("build", "tstl"),
            ("watch", "tstl --watch"),
        ]);

        PackageJson {
            name: config.project_name.clone(),
            license: "MIT",
            // left empty on purpose, the installer fills it in
            dev_dependencies: IndexMap::new(),
            scripts,
        }
    }
}

#[derive(Debug, Serialize)]
struct InfoJson {
    name: String,
    version: &'static str,
    title: String,
    author: &'static str,
    factorio_version: String,
    dependencies: Vec<String>,
    package: InfoJsonPackage,
}
#[derive(Debug, Serialize)]
struct InfoJsonPackage {
    scripts: IndexMap<String, String>,
}
impl InfoJson {
    fn for_project(config: &Config) -> Self {
        let factorio_version = if config.factorio_version == LATEST {
            DEFAULT_FACTORIO_VERSION.to_string()
        } else {
            config.factorio_version.clone()
        };

        InfoJson {
            name: config.project_name.clone(),
            version: "0.0.0",
            title: config.project_name.clone(),
            author: "your-name-here",
            factorio_version,
            dependencies: Vec::new(),
            package: InfoJsonPackage {
                scripts: IndexMap::new(),
            },
        }
    }
}

fn tsconfig() -> serde_json::Value {
    serde_json::json!({
        "compilerOptions": {
            "rootDir": "./src",
            "outDir": "./build",
            "target": "esnext",
            "lib": ["esnext"],
            "moduleResolution": "node",
            "strict": true,
            "sourceMap": false,
            "types": ["typed-factorio/runtime", "@typescript-to-lua/language-extensions"],
        },
        "tstl": {
            "luaTarget": "JIT",
            "noHeader": true,
            "noImplicitSelf": true,
        },
        "include": ["./**/*", "./node_modules/typed-factorio/data/types.d.ts", "gulpfile.js"],
    })
}

const CONTROL_TS: &str = r#"// To avoid type conflicts, the global tables for the settings/data stages have to be declared manually where you need them.
// These types can be imported from typed-factorio/data/types or typed-factorio/settings/types.
//
// import { Data, Mods } from "typed-factorio/data/types"
// or
// import { Data, Mods } from "typed-factorio/settings/types"
//
// declare const data: Data
// declare const mods: Mods
//
// data.extend([{ ... }])

const onTick = (_evt: OnTickEvent) => {
  game.print(serpent.block({ hello: "world", its_nice: "to see you" }))
};

script.on_event(defines.events.on_tick, onTick);
"#;

const GULPFILE_JS: &str = r#"const gulp = require('gulp');
const zip = require('gulp-zip');
const rename = require('gulp-rename');
const info = require('./build/info.json');
const argv = require('yargs').argv;

gulp.task('compress', () => {
  const name = info.name.replace(/\s/g, '_');
  const version = info.version;
  const dest = argv.dest ? argv.dest : 'deployment';

  return gulp.src('./build/**/*')
    .pipe(zip(`${name}_${version}.zip`))
    .pipe(rename((path) => {
      if (argv.dest) {
        path.dirname = '';
      }
    }))
    .pipe(gulp.dest(dest));
});

gulp.task('default', gulp.series('compress'));
"#;

const LOCALE_EN_CFG: &str = r#"# https://wiki.factorio.com/Tutorial:Localisation
# welcome-message=Hello world
# [category]
# title=Category related title
"#;

const CHANGELOG_TXT: &str = "// Changelog goes here";

const DATA_LIFECYCLE_STUB: &str = "// https://lua-api.factorio.com/latest/Data-Lifecycle.html";

/// Stub `.ts` files for each stage of the data lifecycle, written under `src/`.
const LIFECYCLE_STUBS: [&str; 6] = [
    "settings",
    "settings-updates",
    "settings-final-fixes",
    "data",
    "data-updates",
    "data-final-fixes",
];

/// Informational folders with a single HTML fragment pointing at the relevant
/// documentation page.
const INFO_FOLDERS: [(&str, &str, &str); 4] = [
    (
        "scenarios",
        "https://wiki.factorio.com/Scenario_system",
        "the scenario system",
    ),
    (
        "campaigns",
        "https://wiki.factorio.com/Tutorial:Mod_structure",
        "the campaign system",
    ),
    (
        "tutorials",
        "https://wiki.factorio.com/Prototype/Tutorial",
        "the tutorial system",
    ),
    (
        "migrations",
        "https://lua-api.factorio.com/latest/Migrations.html",
        "migrations",
    ),
];

fn readme(config: &Config) -> String {
    format!(
        "# {}\n\nThe world's next best factorio mod!\n\nCreated with fabrika.\n",
        config.project_name
    )
}

fn doc_fragment(url: &str, subject: &str) -> String {
    format!(r#"Visit <a href="{url}">{url}</a> for more information on {subject}."#)
}

fn to_pretty<T: Serialize>(file: &'static str, value: &T) -> Result<String, ManifestError> {
    let json = serde_json::to_string_pretty(value)
        .map_err(|error| ManifestError::Serialize { file, source: error })?;

    Ok(json + "\n")
}

/// Builds the full set of directories and files for a project.
///
/// Pure function of the configuration: no clocks, no randomness, no
/// environment reads. The same [`Config`] always yields byte-identical
/// contents.
///
/// # Errors
///
/// Returns [`ManifestError::Serialize`] if one of the JSON files cannot be
/// serialized.
pub fn build_manifest(config: &Config) -> Result<VirtualFS, ManifestError> {
    let mut vfs = VirtualFS::new();

    vfs.file(
        "package.json",
        to_pretty("package.json", &PackageJson::for_project(config))?,
    );
    vfs.file("readme.md", readme(config));
    vfs.file("tsconfig.json", to_pretty("tsconfig.json", &tsconfig())?);
    vfs.file("gulpfile.js", GULPFILE_JS);

    vfs.dir("src");
    vfs.file(
        "src/info.json",
        to_pretty("src/info.json", &InfoJson::for_project(config))?,
    );
    vfs.file("src/changelog.txt", CHANGELOG_TXT);
    // intentionally empty placeholder
    vfs.file("src/thumbnail.png", "");
    vfs.file("src/control.ts", CONTROL_TS);
    for stub in LIFECYCLE_STUBS {
        vfs.file(format!("src/{stub}.ts"), DATA_LIFECYCLE_STUB);
    }

    vfs.dir("src/locale");
    vfs.file("src/locale/en.cfg", LOCALE_EN_CFG);

    for (folder, url, subject) in INFO_FOLDERS {
        vfs.dir(format!("src/{folder}"));
        vfs.file(format!("src/{folder}/info.html"), doc_fragment(url, subject));
    }

    Ok(vfs)
}
