//! Static projection table.
//!
//! Generated by the `projlist` binary from the PROJ documentation index
//! and pasted here; order follows the documentation page. Definitions
//! that need extra parameters (standard parallels and the like) are kept
//! verbatim and simply skip at render time if PROJ rejects them.

/// Projection display name → PROJ definition string.
pub const PROJECTIONS: &[(&str, &str)] = &[
    ("Albers Equal Area", "+proj=aea +ellps=WGS84 +datum=WGS84 +units=m +no_defs"),
    ("Azimuthal Equidistant", "+proj=aeqd +ellps=WGS84 +datum=WGS84 +units=m +no_defs"),
    ("Airy", "+proj=airy +ellps=WGS84 +datum=WGS84 +units=m +no_defs"),
    ("Aitoff", "+proj=aitoff +ellps=WGS84 +datum=WGS84 +units=m +no_defs"),
    ("August Epicycloidal", "+proj=august +ellps=WGS84 +datum=WGS84 +units=m +no_defs"),
    ("Bonne (Werner lat_1=90)", "+proj=bonne +ellps=WGS84 +datum=WGS84 +units=m +no_defs"),
    ("Cassini", "+proj=cass +ellps=WGS84 +datum=WGS84 +units=m +no_defs"),
    ("Equal Area Cylindrical", "+proj=cea +ellps=WGS84 +datum=WGS84 +units=m +no_defs"),
    ("Collignon", "+proj=collg +ellps=WGS84 +datum=WGS84 +units=m +no_defs"),
    ("Craster Parabolic (Putnins P4)", "+proj=crast +ellps=WGS84 +datum=WGS84 +units=m +no_defs"),
    ("Eckert I", "+proj=eck1 +ellps=WGS84 +datum=WGS84 +units=m +no_defs"),
    ("Eckert II", "+proj=eck2 +ellps=WGS84 +datum=WGS84 +units=m +no_defs"),
    ("Eckert III", "+proj=eck3 +ellps=WGS84 +datum=WGS84 +units=m +no_defs"),
    ("Eckert IV", "+proj=eck4 +ellps=WGS84 +datum=WGS84 +units=m +no_defs"),
    ("Eckert V", "+proj=eck5 +ellps=WGS84 +datum=WGS84 +units=m +no_defs"),
    ("Eckert VI", "+proj=eck6 +ellps=WGS84 +datum=WGS84 +units=m +no_defs"),
    (
        "Equidistant Cylindrical (Plate Carree)",
        "+proj=eqc +ellps=WGS84 +datum=WGS84 +units=m +no_defs",
    ),
    ("Equidistant Conic", "+proj=eqdc +ellps=WGS84 +datum=WGS84 +units=m +no_defs"),
    ("Equal Earth", "+proj=eqearth +ellps=WGS84 +datum=WGS84 +units=m +no_defs"),
    ("Gall (Gall Stereographic)", "+proj=gall +ellps=WGS84 +datum=WGS84 +units=m +no_defs"),
    ("Geostationary Satellite View", "+proj=geos +ellps=WGS84 +datum=WGS84 +units=m +no_defs"),
    ("Gnomonic", "+proj=gnom +ellps=WGS84 +datum=WGS84 +units=m +no_defs"),
    ("Goode Homolosine", "+proj=goode +ellps=WGS84 +datum=WGS84 +units=m +no_defs"),
    (
        "Hammer & Eckert-Greifendorff",
        "+proj=hammer +ellps=WGS84 +datum=WGS84 +units=m +no_defs",
    ),
    (
        "Hatano Asymmetrical Equal Area",
        "+proj=hatano +ellps=WGS84 +datum=WGS84 +units=m +no_defs",
    ),
    ("Interrupted Goode Homolosine", "+proj=igh +ellps=WGS84 +datum=WGS84 +units=m +no_defs"),
    ("Kavrayskiy V", "+proj=kav5 +ellps=WGS84 +datum=WGS84 +units=m +no_defs"),
    (
        "Lambert Azimuthal Equal Area",
        "+proj=laea +ellps=WGS84 +datum=WGS84 +units=m +no_defs",
    ),
    ("Lambert Conformal Conic", "+proj=lcc +ellps=WGS84 +datum=WGS84 +units=m +no_defs"),
    ("Loximuthal", "+proj=loxim +ellps=WGS84 +datum=WGS84 +units=m +no_defs"),
    (
        "McBryde-Thomas Flat-Polar Quartic",
        "+proj=mbtfpq +ellps=WGS84 +datum=WGS84 +units=m +no_defs",
    ),
    ("Mercator", "+proj=merc +ellps=WGS84 +datum=WGS84 +units=m +no_defs"),
    ("Miller Cylindrical", "+proj=mill +ellps=WGS84 +datum=WGS84 +units=m +no_defs"),
    ("Mollweide", "+proj=moll +ellps=WGS84 +datum=WGS84 +units=m +no_defs"),
    ("Natural Earth", "+proj=natearth +ellps=WGS84 +datum=WGS84 +units=m +no_defs"),
    ("Nell", "+proj=nell +ellps=WGS84 +datum=WGS84 +units=m +no_defs"),
    ("Nicolosi Globular", "+proj=nicol +ellps=WGS84 +datum=WGS84 +units=m +no_defs"),
    ("Orthographic", "+proj=ortho +ellps=WGS84 +datum=WGS84 +units=m +no_defs"),
    ("Patterson", "+proj=patterson +ellps=WGS84 +datum=WGS84 +units=m +no_defs"),
    ("Polyconic (American)", "+proj=poly +ellps=WGS84 +datum=WGS84 +units=m +no_defs"),
    ("Quartic Authalic", "+proj=qua_aut +ellps=WGS84 +datum=WGS84 +units=m +no_defs"),
    ("Robinson", "+proj=robin +ellps=WGS84 +datum=WGS84 +units=m +no_defs"),
    ("Sinusoidal (Sanson-Flamsteed)", "+proj=sinu +ellps=WGS84 +datum=WGS84 +units=m +no_defs"),
    ("Stereographic", "+proj=stere +ellps=WGS84 +datum=WGS84 +units=m +no_defs"),
    ("Transverse Mercator", "+proj=tmerc +ellps=WGS84 +datum=WGS84 +units=m +no_defs"),
    ("van der Grinten (I)", "+proj=vandg +ellps=WGS84 +datum=WGS84 +units=m +no_defs"),
    ("Wagner IV", "+proj=wag4 +ellps=WGS84 +datum=WGS84 +units=m +no_defs"),
    ("Web Mercator / Pseudo Mercator", "+proj=webmerc +ellps=WGS84 +datum=WGS84 +units=m +no_defs"),
    ("Winkel I", "+proj=wink1 +ellps=WGS84 +datum=WGS84 +units=m +no_defs"),
    ("Winkel Tripel", "+proj=wintri +ellps=WGS84 +datum=WGS84 +units=m +no_defs"),
];
