/// Una etapa de la biografía.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Era {
  pub heading: &'static str,
  pub paragraphs: &'static [&'static str],
}

pub const BIOGRAPHY: &[Era] = &[
  Era {
    heading: "2007-2008 // netlabel era",
    paragraphs: &[
      "emerged during the golden age of netlabel culture, releasing works through prominent platforms \
       including noise-joy, dog eared records, resting bell, and audiotalaia. characterized by intimate \
       guitar-based compositions and pastoral minimal folk influenced by natural phenomena and landscapes.",
      "key works include 'the world that was surrounded by a deep forest and warm light' (resting bell, \
       2008), which established the foundation of my sound, and 'gray sky' (2008), marking a dramatic shift \
       toward dense, continuous ambient drone.",
    ],
  },
  Era {
    heading: "2009-2010 // physical media transition",
    paragraphs: &[
      "transitioned from digital-only releases to physical formats through respected labels including \
       experimedia, students of decay, and smallfish. this period saw the development of more constructed, \
       refined compositions while maintaining the exploration of transparency and flow.",
      "released 'small conversations' (experimedia, 2009) as a limited 150-copy pressing and contributed to \
       important compilations, solidifying international recognition.",
    ],
  },
  Era {
    heading: "2011-2012 // methodological innovation",
    paragraphs: &[
      "contributed 'return' to the landmark compilation 'air texture vol. 1' alongside oneohtrix point \
       never, loscil, and biosphere, a recognition of my work as essential to defining atmospheric textures \
       in contemporary electronic music.",
      "released 'troposphere' (twice removed, 2012), a pivotal work created entirely from processed guitar \
       recordings without synthesizers. utilizing ableton live for extensive filtering and processing, this \
       album showcased a sculptural approach to sound design, creating vast soundscapes from minimal source \
       material.",
    ],
  },
  Era {
    heading: "2013-present // analog return & collaboration",
    paragraphs: &[
      "shifted focus toward collaboration and organic recording methods. formed rion with ian hawgood (home \
       normal), deliberately eschewing computers in favor of cassette recorders, reel-to-reel tape, and \
       acoustic instruments. 'fireflies' (hibernate recordings, 2013) combined drone guitar with field \
       recordings and church organs, capturing the quiet magic of rural summers.",
      "collaborated with offthesky on 'breathing' (dronarivm, 2013), a dialogic two-disc work exploring \
       mutual sonic spaces. these projects represent a full-circle return to organic warmth and physical \
       materiality after intensive digital experimentation.",
    ],
  },
  Era {
    heading: "philosophy",
    paragraphs: &["my work embodies the broader trajectory of 2000s-2010s ambient music: from digital \
       democratization through netlabels, to sculptural sound design via DAWs, and ultimately to renewed \
       appreciation for analog warmth and physical media. each piece seeks not merely to provide atmosphere, \
       but to invite listeners into meditative spaces where sound and silence exist in dialogue."],
  },
];
