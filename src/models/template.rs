use std::path::{Path, PathBuf};

/// A static file written into a freshly scaffolded project
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FileTemplate {
    /// File name relative to the project folder
    pub file_name: &'static str,
    /// Human label used in log lines
    pub label: &'static str,
    pub content: &'static str,
}

impl FileTemplate {
    /// Location of this template inside `project_dir`
    pub fn target_path(&self, project_dir: &Path) -> PathBuf {
        project_dir.join(self.file_name)
    }
}

pub const PIPFILE: FileTemplate = FileTemplate {
    file_name: "Pipfile",
    label: "Pipfile",
    content: PIPFILE_CONTENT,
};

pub const GITIGNORE: FileTemplate = FileTemplate {
    file_name: ".gitignore",
    label: ".gitignore file",
    content: GITIGNORE_CONTENT,
};

/// Templates in the order they are written
pub const PROJECT_TEMPLATES: [FileTemplate; 2] = [PIPFILE, GITIGNORE];

/// Subdirectories every project gets, with the label used in log lines
pub const PROJECT_DIRECTORIES: [(&str, &str); 2] = [("src", "Source"), ("tests", "Tests")];

/// Dependency manifest written as `Pipfile`; every entry is commented out
pub const PIPFILE_CONTENT: &str = r#"# [[source]]
# url = "https://pypi.org/simple"
# verify_ssl = true
# name = "pypi"

# [packages]
# db-dtypes = "*"

# [dev-packages]
# pytest = "*"
# mypy = "*"
# pandas-stubs = "*"

# [requires]
# python_version = "3.11""#;

/// Standard Python ignore list written as `.gitignore`
pub const GITIGNORE_CONTENT: &str = r#"# Byte-compiled / optimized / DLL files
__pycache__/
*.py[cod]
*$py.class

# C extensions
*.so

# Distribution / packaging
.Python
build/
dist/
downloads/
eggs/
lib/
lib64/
parts/
sdist/
var/
wheels/
pip-wheel-metadata/
share/python-wheels/
*.egg-info/
.installed.cfg
*.egg
MANIFEST

# PyInstaller
*.manifest
*.spec

# Installer logs
pip-log.txt
pip-delete-this-directory.txt

# Unit test / coverage reports
htmlcov/
.tox/
.nox/
.coverage
.coverage.*
.cache
nosetests.xml
coverage.xml
*.cover
*.py,cover
.hypothesis/
.pytest_cache/

# Translations
*.mo
*.pot

# Django stuff:
*.log
local_settings.py
db.sqlite3
db.sqlite3-journal

# Flask stuff:
instance/
.webassets-cache

# Scrapy stuff:
.scrapy

# Sphinx documentation
docs/_build/

# PyBuilder
target/

# Jupyter Notebook
.ipynb_checkpoints

# IPython
profile_default/
ipython_config.py

# pyenv
.python-version

# pipenv
#Pipfile.lock

# PEP 582; used by e.g. github.com/David-OConnor/pyflow
__pypackages__/

# Celery stuff
celerybeat-schedule
celerybeat.pid

# SageMath parsed files
*.sage.py

# Environments
.env
.venv
env/
venv/
ENV/
env.bak/
venv.bak/

# Spyder project settings
.spyderproject
.spyproject

# Rope project settings
.ropeproject

# mkdocs documentation
/site

# mypy
.mypy_cache/
.dmypy.json
dmypy.json

# Pyre type checker
.pyre/
"#;
