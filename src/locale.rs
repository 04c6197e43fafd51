// SPDX-FileCopyrightText: 2025 RAprogramm <andrey.rozanov.vl@gmail.com>
//
// SPDX-License-Identifier: MIT

//! Localized card strings.
//!
//! Tables are indexed by [`Category`] and [`StatKey`] so a missing label is a
//! compile error rather than a lookup failure.

use crate::{
    error::Error,
    stats::{Category, StatKey},
};

/// Placeholder replaced by the account name in title templates.
pub const NAME_PLACEHOLDER: &str = "{0}";

/// Locale used when the configuration names none.
pub const DEFAULT_LOCALE: &str = "en";

/// Strings for one locale.
#[derive(Debug, PartialEq, Eq,)]
pub struct LocaleTable
{
    /// Locale code.
    pub code:                 &'static str,
    /// Card title template containing [`NAME_PLACEHOLDER`].
    pub title:                &'static str,
    /// Category headings in [`Category::ALL`] order.
    pub headings:             [&'static str; 4],
    /// Column headers of the repositories category.
    pub repository_columns:   [&'static str; 2],
    /// Column headers of the contributions category.
    pub contribution_columns: [&'static str; 2],
    /// Statistic labels in [`StatKey::ALL`] order.
    pub labels:               [&'static str; 20],
}

impl LocaleTable
{
    /// Heading of a category.
    pub fn heading(&self, category: Category,) -> &'static str
    {
        self.headings[category as usize]
    }

    /// Column headers for categories rendered with two value columns.
    pub fn columns(&self, category: Category,) -> Option<[&'static str; 2],>
    {
        match category {
            Category::Repositories => Some(self.repository_columns,),
            Category::Contributions => Some(self.contribution_columns,),
            Category::General | Category::Languages => None,
        }
    }

    /// Label of a statistic.
    pub fn label(&self, key: StatKey,) -> &'static str
    {
        self.labels[key.index()]
    }

    /// Fills the title template with `name`.
    ///
    /// Templates without the placeholder are returned unchanged.
    pub fn fill_title(&self, name: &str,) -> String
    {
        self.title.replace(NAME_PLACEHOLDER, name,)
    }
}

const LOCALES: [LocaleTable; 6] = [
    LocaleTable {
        code:                 "en",
        title:                "{0}'s GitHub Activity",
        headings:             [
            "General Stats and Info",
            "Repositories",
            "Contributions",
            "Language Distribution",
        ],
        repository_columns:   ["Non-Forks", "All",],
        contribution_columns: ["Past Year", "Total",],
        labels:               [
            "Year Joined",
            "Featured Repo",
            "Most Starred Repo",
            "Most Forked Repo",
            "Followers",
            "Following",
            "Sponsors",
            "Sponsoring",
            "Public Repositories",
            "Starred By",
            "Forked By",
            "Watched By",
            "Templates",
            "Archived",
            "Commits",
            "Issues",
            "Pull Requests",
            "Pull Request Reviews",
            "Contributed To",
            "Private Contributions",
        ],
    },
    LocaleTable {
        code:                 "de",
        title:                "GitHub-Aktivität von {0}",
        headings:             [
            "Allgemeine Statistiken und Infos",
            "Repositorys",
            "Beiträge",
            "Sprachverteilung",
        ],
        repository_columns:   ["Ohne Forks", "Alle",],
        contribution_columns: ["Letztes Jahr", "Gesamt",],
        labels:               [
            "Beitrittsjahr",
            "Empfohlenes Repo",
            "Repo mit den meisten Sternen",
            "Meistgeforktes Repo",
            "Follower",
            "Folgt",
            "Sponsoren",
            "Sponsert",
            "Öffentliche Repositorys",
            "Mit Stern markiert von",
            "Geforkt von",
            "Beobachtet von",
            "Vorlagen",
            "Archiviert",
            "Commits",
            "Issues",
            "Pull-Requests",
            "Pull-Request-Reviews",
            "Beigetragen zu",
            "Private Beiträge",
        ],
    },
    LocaleTable {
        code:                 "es",
        title:                "Actividad de {0} en GitHub",
        headings:             [
            "Estadísticas generales e información",
            "Repositorios",
            "Contribuciones",
            "Distribución de lenguajes",
        ],
        repository_columns:   ["Sin forks", "Todos",],
        contribution_columns: ["Último año", "Total",],
        labels:               [
            "Año de registro",
            "Repositorio destacado",
            "Repositorio con más estrellas",
            "Repositorio con más forks",
            "Seguidores",
            "Siguiendo",
            "Patrocinadores",
            "Patrocinando",
            "Repositorios públicos",
            "Estrellas recibidas",
            "Forks recibidos",
            "Observado por",
            "Plantillas",
            "Archivados",
            "Commits",
            "Issues",
            "Pull requests",
            "Revisiones de pull requests",
            "Contribuyó a",
            "Contribuciones privadas",
        ],
    },
    LocaleTable {
        code:                 "fr",
        title:                "Activité GitHub de {0}",
        headings:             [
            "Statistiques générales et infos",
            "Dépôts",
            "Contributions",
            "Répartition des langages",
        ],
        repository_columns:   ["Hors forks", "Tous",],
        contribution_columns: ["Année passée", "Total",],
        labels:               [
            "Année d'inscription",
            "Dépôt en vedette",
            "Dépôt le plus étoilé",
            "Dépôt le plus forké",
            "Abonnés",
            "Abonnements",
            "Sponsors",
            "Sponsorise",
            "Dépôts publics",
            "Étoilé par",
            "Forké par",
            "Suivi par",
            "Modèles",
            "Archivés",
            "Commits",
            "Issues",
            "Pull requests",
            "Revues de pull requests",
            "A contribué à",
            "Contributions privées",
        ],
    },
    LocaleTable {
        code:                 "it",
        title:                "Attività GitHub di {0}",
        headings:             [
            "Statistiche generali e info",
            "Repository",
            "Contributi",
            "Distribuzione dei linguaggi",
        ],
        repository_columns:   ["Esclusi i fork", "Tutti",],
        contribution_columns: ["Ultimo anno", "Totale",],
        labels:               [
            "Anno di iscrizione",
            "Repository in evidenza",
            "Repository con più stelle",
            "Repository con più fork",
            "Follower",
            "Seguiti",
            "Sponsor",
            "Sponsorizzati",
            "Repository pubblici",
            "Stelle ricevute",
            "Fork ricevuti",
            "Osservato da",
            "Modelli",
            "Archiviati",
            "Commit",
            "Issue",
            "Pull request",
            "Revisioni di pull request",
            "Ha contribuito a",
            "Contributi privati",
        ],
    },
    LocaleTable {
        code:                 "pt",
        title:                "Atividade de {0} no GitHub",
        headings:             [
            "Estatísticas gerais e informações",
            "Repositórios",
            "Contribuições",
            "Distribuição de linguagens",
        ],
        repository_columns:   ["Sem forks", "Todos",],
        contribution_columns: ["Último ano", "Total",],
        labels:               [
            "Ano de entrada",
            "Repositório em destaque",
            "Repositório com mais estrelas",
            "Repositório com mais forks",
            "Seguidores",
            "Seguindo",
            "Patrocinadores",
            "Patrocinando",
            "Repositórios públicos",
            "Estrelas recebidas",
            "Forks recebidos",
            "Observado por",
            "Modelos",
            "Arquivados",
            "Commits",
            "Issues",
            "Pull requests",
            "Revisões de pull requests",
            "Contribuiu para",
            "Contribuições privadas",
        ],
    },
];

/// Codes of the shipped locales.
pub fn supported_codes() -> impl Iterator<Item = &'static str,>
{
    LOCALES.iter().map(|table| table.code,)
}

/// Looks up the table of a locale code, ignoring ASCII case.
///
/// # Errors
///
/// Returns [`Error::UnsupportedLocale`] when no table exists for the code.
pub fn lookup(code: &str,) -> Result<&'static LocaleTable, Error,>
{
    LOCALES.iter().find(|table| table.code.eq_ignore_ascii_case(code,),).ok_or_else(|| {
        Error::UnsupportedLocale {
            code: code.to_owned(),
        }
    },)
}

#[cfg(test)]
mod tests
{
    use super::*;

    #[test]
    fn every_locale_fills_the_name()
    {
        for code in supported_codes() {
            let table = lookup(code,).expect("shipped locale",);
            assert!(table.fill_title("octocat",).contains("octocat"), "{code}");
            assert!(table.labels.iter().all(|label| !label.is_empty()), "{code}");
        }
    }

    #[test]
    fn english_strings()
    {
        let table = lookup("EN",).expect("shipped locale",);
        assert_eq!(table.fill_title("Mona"), "Mona's GitHub Activity");
        assert_eq!(table.heading(Category::Languages), "Language Distribution");
        assert_eq!(table.label(StatKey::Joined), "Year Joined");
        assert_eq!(table.label(StatKey::Private), "Private Contributions");
        assert_eq!(table.columns(Category::Repositories), Some(["Non-Forks", "All"]));
        assert_eq!(table.columns(Category::General), None);
    }

    #[test]
    fn template_without_placeholder_renders_statically()
    {
        let table = LocaleTable {
            title: "GitHub Activity",
            ..LOCALES[0]
        };
        assert_eq!(table.fill_title("Mona"), "GitHub Activity");
    }

    #[test]
    fn unsupported_locale_is_an_error()
    {
        let error = lookup("tlh",).expect_err("unsupported locale",);
        assert!(matches!(error, Error::UnsupportedLocale { ref code } if code == "tlh"));
    }
}
