//! Contenido de fábrica usado cuando el almacén no tiene nada guardado.

use crate::domain::about::About;
use crate::domain::bundle::{CURRENT_SCHEMA_VERSION, ContentBundle};
use crate::domain::collaboration::Collaboration;
use crate::domain::contact::Contact;
use crate::domain::ids::WorkId;
use crate::domain::work::Work;

// (año, título, formato, sello, nota), más reciente primero
const DISCOGRAPHY: &[(&str, &str, &str, &str, &str)] = &[
  ("2013", "breathing", "album (2xcd)", "dronarivm", "collaboration with offthesky"),
  ("2013", "fireflies", "album (cd)", "hibernate recordings", "as rion with ian hawgood"),
  ("2012", "troposphere", "album (digital)", "twice removed", "guitar-only source material processed in ableton live"),
  ("2011", "north small town", "album (digital)", "own label", ""),
  ("2010", "window to the room", "album (cd)", "under the spire", ""),
  ("2010", "past memory and image", "album (cd)", "students of decay", "includes tracks moon and blue lake"),
  ("2009", "small conversations", "album (cd)", "experimedia", "limited to 150 copies"),
  ("2009", "four fragments", "album (cd-r)", "smallfish", "london label"),
  ("2009", "sunlight & water", "album (cd-r)", "the land of", ""),
  ("2009", "periodic wind", "single track (digital)", "audiotalaia", "27-minute drone piece"),
  (
    "2008",
    "the world that was surrounded by a deep forest and warm light",
    "album (digital)",
    "resting bell",
    "minimal folk / ambient. includes tracks green world, kaze, trip",
  ),
  ("2008", "gray sky", "single track (digital)", "resting bell", "17-minute dense ambient drone"),
  ("2008", "transparence", "album (digital)", "audiotalaia", ""),
  ("2008", "today's weather is rainy", "album (digital)", "dog eared records", ""),
  ("2008", "all the things which i see", "album (digital)", "lunar flower", "includes track night walk"),
  ("2007", "sea", "album (digital)", "noise-joy", "early experimental work"),
  ("2007", "slow time", "album (digital)", "dog eared records", ""),
];

// (artista, título, año, formato, sello, nota)
const COLLABORATIONS: &[(&str, &str, &str, &str, &str, &str)] = &[
  (
    "ryonkt",
    "return",
    "2011",
    "compilation track",
    "air texture vol. 1",
    "7:49 track. alongside oneohtrix point never, loscil, biosphere",
  ),
  (
    "rion (ryonkt & ian hawgood)",
    "fireflies",
    "2013",
    "album (cd)",
    "hibernate recordings",
    "analog recording with cassette & reel-to-reel tape",
  ),
  (
    "ryonkt & offthesky",
    "breathing",
    "2013",
    "album (2xcd)",
    "dronarivm",
    "collaborative dialogue between japan and usa",
  ),
];

pub fn default_works() -> Vec<Work> {
  DISCOGRAPHY
    .iter()
    .zip(1u64..)
    .map(|(&(year, title, format, label, note), id)| Work {
      id: WorkId::new(id),
      title: title.to_string(),
      year: year.to_string(),
      kind: format.into(),
      url: String::new(),
      label: label.to_string(),
      note: note.to_string(),
    })
    .collect()
}

pub fn default_collaborations() -> Vec<Collaboration> {
  COLLABORATIONS
    .iter()
    .map(|&(artist, title, year, format, label, note)| Collaboration {
      artist: artist.to_string(),
      title: title.to_string(),
      year: year.to_string(),
      format: format.to_string(),
      label: label.to_string(),
      note: note.to_string(),
    })
    .collect()
}

pub fn default_about() -> About {
  About {
    description1: "i'm ryo nakata, born in 1984 in sapporo, japan. i create ambient and drone music under the \
                   name ryonkt. using guitar and digital processing, i craft immersive soundscapes that explore \
                   the delicate balance between sound and silence."
      .to_string(),
    description2: "my approach focuses on minimal phrases and spatial expressions, translating everyday \
                   scenery and natural phenomena into sonic landscapes. from intimate guitar-based \
                   compositions to dense digital drones and organic analog recordings, i seek to create \
                   meditative environments that invite deep listening."
      .to_string(),
    techniques: "guitar processing / field recording / digital manipulation / analog tape / spatial composition"
      .to_string(),
    influences: "ambient / drone / minimal folk / atmospheric / organic soundscapes".to_string(),
    tools: "guitar / ableton live / field recorders / cassette recorders / reel-to-reel tape".to_string(),
  }
}

pub fn default_contact() -> Contact {
  Contact {
    email: "contact@ryonkt.org".to_string(),
    bandcamp: "ryonkt.bandcamp.com".to_string(),
    soundcloud: "soundcloud.com/ryonkt".to_string(),
    instagram: "@ryonkt_official".to_string(),
  }
}

pub fn default_bundle() -> ContentBundle {
  ContentBundle {
    schema_version: CURRENT_SCHEMA_VERSION,
    works: default_works(),
    about: default_about(),
    contact: default_contact(),
    collaborations: default_collaborations(),
  }
}
