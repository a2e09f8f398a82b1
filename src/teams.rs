// src/teams.rs

use std::path::Path;

use serde::Deserialize;

use crate::error::ScheduleError;

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct Team {
    pub area: String,
    pub name: String,
    pub stadium: String,
    pub address: String,
    pub league: String,
    pub division: String,
    #[serde(default)]
    short_name: Option<String>,
}

impl Team {
    pub fn new(area: &str, name: &str, stadium: &str, address: &str, league: &str, division: &str) -> Self {
        Self {
            area: s!(area),
            name: s!(name),
            stadium: s!(stadium),
            address: s!(address),
            league: s!(league),
            division: s!(division),
            short_name: None,
        }
    }

    pub fn with_short_name(mut self, short: &str) -> Self {
        self.short_name = Some(s!(short));
        self
    }

    /// "Boston Red Sox"
    pub fn full_name(&self) -> String {
        format!("{} {}", self.area, self.name)
    }

    /// File stem of the team's schedule: explicit override, else "redsox".
    pub fn short_name(&self) -> String {
        match &self.short_name {
            Some(s) if !s.is_empty() => s.clone(),
            _ => self.name.replace(' ', "").to_lowercase(),
        }
    }
}

/// Teams in canonical order. Position in this list drives report columns
/// and the order-preserving orderings.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TeamList {
    teams: Vec<Team>,
}

impl TeamList {
    pub fn new(teams: Vec<Team>) -> Self { Self { teams } }

    pub fn len(&self) -> usize { self.teams.len() }
    pub fn is_empty(&self) -> bool { self.teams.is_empty() }
    pub fn iter(&self) -> std::slice::Iter<'_, Team> { self.teams.iter() }

    pub fn names(&self) -> Vec<String> {
        self.teams.iter().map(|t| t.name.clone()).collect()
    }

    pub fn position(&self, name: &str) -> Option<usize> {
        self.teams.iter().position(|t| t.name == name)
    }

    pub fn get(&self, name: &str) -> Option<&Team> {
        self.teams.iter().find(|t| t.name == name)
    }

    /// Map loose user input ("yankees", "New York Yankees") to the canonical name.
    pub fn resolve(&self, text: &str) -> Option<&str> {
        let t = text.trim();
        self.teams
            .iter()
            .find(|team| {
                team.name.eq_ignore_ascii_case(t)
                    || team.full_name().eq_ignore_ascii_case(t)
                    || team.short_name().eq_ignore_ascii_case(t)
            })
            .map(|team| team.name.as_str())
    }

    /// Read a headed CSV: area,name,stadium,address,league,division[,short_name]
    pub fn load(path: &Path) -> Result<Self, ScheduleError> {
        let mut rdr = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .flexible(true)
            .from_path(path)
            .map_err(|source| ScheduleError::Csv { path: path.to_path_buf(), source })?;

        let mut teams = Vec::new();
        for rec in rdr.deserialize() {
            let team: Team = rec.map_err(|source| ScheduleError::Csv { path: path.to_path_buf(), source })?;
            teams.push(team);
        }
        log::debug!("Teams: loaded {} from {}", teams.len(), path.display());
        Ok(Self { teams })
    }

    /// Built-in list of all 30 MLB clubs, grouped by league and division.
    pub fn mlb() -> Self {
        let al_east = |a: &str, n: &str, s: &str, addr: &str| Team::new(a, n, s, addr, "American", "East");
        let nl_east = |a: &str, n: &str, s: &str, addr: &str| Team::new(a, n, s, addr, "National", "East");
        let al_central = |a: &str, n: &str, s: &str, addr: &str| Team::new(a, n, s, addr, "American", "Central");
        let nl_central = |a: &str, n: &str, s: &str, addr: &str| Team::new(a, n, s, addr, "National", "Central");
        let al_west = |a: &str, n: &str, s: &str, addr: &str| Team::new(a, n, s, addr, "American", "West");
        let nl_west = |a: &str, n: &str, s: &str, addr: &str| Team::new(a, n, s, addr, "National", "West");

        Self::new(vec![
            al_east("Boston", "Red Sox", "Fenway Park", "4 Yawkey Way Boston, MA 02215"),
            al_east("New York", "Yankees", "Yankee Stadium", "One East 161st Street Bronx, NY 10451"),
            al_east("Baltimore", "Orioles", "Camden Yards", "333 West Camden Street Baltimore, MD 21201"),
            al_east("Tampa Bay", "Rays", "Tropicana Field", "1 Tropicana Dr., St. Petersburg, FL 33705"),
            al_east("Toronto", "Blue Jays", "Rogers Centre", "1 Blue Jays Way, Toronto, ON M5V 1J1, Canada"),

            nl_east("New York", "Mets", "Citi Field", "120-01 Roosevelt Avenue Corona, NY 11368"),
            nl_east("Philadelphia", "Phillies", "Citizens Bank Park", "One Citizens Bank Way Philadelphia, PA 19148"),
            nl_east("Washington", "Nationals", "Nationals Park", "1500 South Capitol Street, SE Washington, DC 20003-1507"),
            nl_east("Miami", "Marlins", "Marlins Park", "501 Marlins Way, Miami, FL 33125"),
            nl_east("Atlanta", "Braves", "SunTrust Park", "755 Battery Avenue Southeast, Atlanta, GA 30339"),

            al_central("Chicago", "White Sox", "Guaranteed Rate Field", "333 W 35th St, Chicago, IL 60616"),
            al_central("Cleveland", "Indians", "Progressive Field", "2401 Ontario St, Cleveland, OH 44115"),
            al_central("Minnesota", "Twins", "Target Field", "1 Twins Way Minneapolis, MN 55403"),
            al_central("Detroit", "Tigers", "Comerica Park", "2100 Woodward Ave, Detroit, MI 48201"),
            al_central("Kansas City", "Royals", "Kauffman Stadium", "1 Royal Way, Kansas City, MO 64129"),

            nl_central("Chicago", "Cubs", "Wrigley Field", "1060 W Addison St, Chicago, IL 60613"),
            nl_central("Cincinnati", "Reds", "Great American Ball Park", "100 Joe Nuxhall Way, Cincinnati, OH 45202"),
            nl_central("Milwaukee", "Brewers", "Miller Park", "1 Brewers Way, Milwaukee, WI 53214"),
            nl_central("Saint Louis", "Cardinals", "Busch Stadium", "700 Clark Ave, St. Louis, MO 63102"),
            nl_central("Pittsburgh", "Pirates", "PNC Park", "115 Federal Street Pittsburgh, PA 15212"),

            al_west("Los Angeles", "Angels", "Angel Stadium", "2000 E Gene Autry Way, Anaheim, CA 92806"),
            al_west("Houston", "Astros", "Minute Maid Park", "501 Crawford St, Houston, TX 77002"),
            al_west("Texas", "Rangers", "Globe Life Park", "1000 Ballpark Way, Arlington, TX 76011"),
            al_west("Seattle", "Mariners", "Safeco Field", "1250 1st Ave S, Seattle, WA 98134"),
            al_west("Oakland", "Athletics", "Oakland-Alameda County Coliseum", "7000 Coliseum Way, Oakland, CA"),

            nl_west("Los Angeles", "Dodgers", "Dodger Stadium", "1000 Vin Scully Ave, Los Angeles, CA 90012"),
            nl_west("San Francisco", "Giants", "AT&T Park", "24 Willie Mays Plaza, San Francisco, CA 94107"),
            nl_west("San Diego", "Padres", "Petco Park", "100 Park Blvd, San Diego, CA 92101"),
            nl_west("Arizona", "Diamondbacks", "Chase Field", "401 E Jefferson St, Phoenix, AZ 85004")
                .with_short_name("dbacks"),
            nl_west("Colorado", "Rockies", "Coors Field", "2001 Blake St, Denver, CO 80205"),
        ])
    }
}

impl<'a> IntoIterator for &'a TeamList {
    type Item = &'a Team;
    type IntoIter = std::slice::Iter<'a, Team>;
    fn into_iter(self) -> Self::IntoIter { self.teams.iter() }
}
