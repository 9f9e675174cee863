//! Reference values computed with 380 significant decimal digits and rounded to 350.

pub const SQRT: &[(&str, &str)] = &[
    ("0.5", "0.70710678118654752440084436210484903928483593768847403658833986899536623923105351942519376716382078636750692311545614851246241802792536860632206074854996791570661133296375279637789997525057639103028573505477998580298513726729843100736425870932044459930477616461524215435716072541988130181399762570399484362669827316590441482031030762917619752737287514"),
    ("2", "1.4142135623730950488016887242096980785696718753769480731766797379907324784621070388503875343276415727350138462309122970249248360558507372126441214970999358314132226659275055927557999505011527820605714701095599716059702745345968620147285174186408891986095523292304843087143214508397626036279952514079896872533965463318088296406206152583523950547457503"),
    ("3", "1.7320508075688772935274463415058723669428052538103806280558069794519330169088000370811461867572485756756261414154067030299699450949989524788116555120943736485280932319023055820679748201010846749232650153123432669033228866506722546689218379712270471316603678615880190499865373798593894676503475065760507566183481296061009476021871903250831458295239598"),
    ("4", "2.0000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000"),
    ("12345.6875", "111.11114930554899088767327105727507312944312346514607953124590927426675441090921885155373701685905284195929073517002357034386165147474679861208079793959070551673268169831974334249750768423759620022267576326716323116631599443439853734970395432805215122260362892367312578343949420616977741672961971742629883351506968057142823652328093212025606802294086"),
    ("0.0009765625", "0.031250000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000"),
];

pub const LN: &[(&str, &str)] = &[
    ("0.5", "-0.69314718055994530941723212145817656807550013436025525412068000949339362196969471560586332699641868754200148102057068573368552023575813055703267075163507596193072757082837143519030703862389167347112335011536449795523912047517268157493206515552473413952588295045300709532636664265410423915781495204374043038550080194417064167151864471283996817178454696"),
    ("0.25", "-1.3862943611198906188344642429163531361510002687205105082413600189867872439393894312117266539928373750840029620411413714673710404715162611140653415032701519238614551416567428703806140772477833469422467002307289959104782409503453631498641303110494682790517659009060141906527332853082084783156299040874808607710016038883412833430372894256799363435690939"),
    ("2", "0.69314718055994530941723212145817656807550013436025525412068000949339362196969471560586332699641868754200148102057068573368552023575813055703267075163507596193072757082837143519030703862389167347112335011536449795523912047517268157493206515552473413952588295045300709532636664265410423915781495204374043038550080194417064167151864471283996817178454696"),
    ("3", "1.0986122886681096913952452369225257046474905578227494517346943336374942932186089668736157548137320887879700290659578657423680042259305198210528018707672774106031627691833813671793736988443609599037425703167959115211455919177506713470549401667755802222031702529468975606901065215056428681380363173732985777823669916547921318181490200301038236301222487"),
    ("10", "2.3025850929940456840179914546843642076011014886287729760333279009675726096773524802359972050895982983419677840422862486334095254650828067566662873690987816894829072083255546808437998948262331985283935053089653777326288461633662222876982198867465436674744042432743651550489343149393914796194044002221051017141748003688084012647080685567743216228355220"),
    ("4096", "8.3177661667193437130067854574981188169060016123230630494481601139207234636363365872703599239570242505040177722468482288042262428290975666843920490196209115431687308499404572222836844634867000816534802013843739754628694457020721788991847818662968096743105954054360851439163997118492508698937794245248851646260096233300477000582237365540796180614145635"),
    ("100000", "11.512925464970228420089957273421821038005507443143864880166639504837863048386762401179986025447991491709838920211431243167047627325414033783331436845493908447414536041627773404218999474131165992641967526544826888663144230816831111438491099433732718337372021216371825775244671574696957398097022001110525508570874001844042006323540342783871608114177610"),
    ("1.0009765625", "0.00097608597305545889596082490801718667261183433378453623775859827440037212402587916395162759415915721790828523309876030934343926530395286819453731101641094088130006496793432111354748800225841711252776135377194868999313468379512875538784883763982331377239724234848513688620072728324181886243209877680511717443184029949474774144524573279588709225074621810"),
];

pub const EXP: &[(&str, &str)] = &[
    ("1", "2.7182818284590452353602874713526624977572470936999595749669676277240766303535475945713821785251664274274663919320030599218174135966290435729003342952605956307381323286279434907632338298807531952510190115738341879307021540891499348841675092447614606680822648001684774118537423454424371075390777449920695517027618386062613313845830007520449338265602976"),
    ("-1", "0.36787944117144232159552377016146086744581113103176783450783680169746149574489980335714727434591964374662732527684399520824697579279012900862665358949409878309219436737733811504863899112514561634498771997868447595793974730254989249545323936620796481051464752061229422308916492656660036507457728370553285373838810680478761195682989345449735073931859922"),
    ("0.5", "1.6487212707001281468486507878141635716537761007101480115750793116406610211942156086327765200563666430028666377563077970046711669752196091598409714524900597969294226590984039147199484646594892448968689053364184657208410666568598000889249812117122873752149721955119716090340911156197998698399606426550917545746263044830751947582587826254399319557126901"),
    ("10", "22026.465794806716516957900645284244366353512618556781074235426355225202818570792575199120968164525895451555501092457836652423291606522895166222480137728972873485577837847275195480610095881417055888657927317236168401192698035170264925041101757502556764762696107543817931960834044404934236682455357614946828619042431465132389556031319229262768101604495"),
    ("-20.25", "1.6052280551856116086539343091095396571711681601401508582031513235139621961207778200373401637076178266543741537299862987686555064074878065786420670590647342436712382616548280127047886941461408726631904160956484608530206690762462789726459467277629571656713383019781241224422083501463470673227320873461003270674758337418507932373467363647503359539848142e-9"),
    ("100", "2.6881171418161354484126255515800135873611118773741922415191608615280287034909564914158871097219845710811670879190576068697597709761868233548459638929871966089629133626120029380957276534032962269865668016917743514451846065162804442237756762296960284731911402129862281040057911593878790384974173340084912432828126815454426051808828625966509400466909062e43"),
    ("0.0009765625", "1.0009770394924165352428452926116065064658516291817441994018640826491625042889686917365685369088246718607561376106545926069696917989894323112295476904919188976495587533424096435299987245139604295345221919044180162994083587235750837230562817886439819064576971527427511638680150975107748666789845691771020996021977749681301189491911289282250150237572206"),
];

pub const SIN: &[(&str, &str)] = &[
    ("0.5", "0.47942553860420300027328793521557138808180336794060067518861661312553500028781483220963127468434826908613209108450571741781109374860994028278015396204619192460995729393228140053354633818805522859567013569985423363912107172077738015297987137716951517618072114969807370147476869703198703900097339549102989443417733111109673903936124163653480401918346314"),
    ("1", "0.84147098480789650665250232163029899962256306079837106567275170999191040439123966894863974354305269585434903790792067429325911892099189888119341032772921240948079195582676660699990776401197840878273256634748480287029865615701796245539489357292467012708648628105338203056137721820386844966776167426623901338275339795676425556547796398976482432869027570"),
    ("3", "0.14112000805986722210074480280811027984693326425226558415188264123242200996701447191128217285344986375041367294826732741684445703166885757375403365785491121781178547683482078216676413721556665886468984403153833012515278359076522350444195094488983392554562224160383624182939544259174410366457405665411545993098230085116590155481231031583793547592135167"),
    ("-2.75", "-0.38166099205233169857656137237778030108224775862122021952985377263041062546151272557185775027038744631465636229989048850666808539061359762930318112569822517981910761912288443633443483483447660398617970439859702548726235150296184326409985295895742589299433094601537706754585558988484112332263535043629659837219760988071877414332372114773187174750180392"),
    ("10", "-0.54402111088936981340474766185137728168364301291622389157418401261675720964049342570707567389498321615829382423826283228551950705643829970313082429461063364026321628198485632926404765679566632046377926927402537727290611276706451048487110457126379414682139289420875720845835061967150157964481785854175893752427652673361879499395584873262026366411112981"),
    ("100", "-0.50636564110975879365655761045978543206503272129065732344339247359435791341947669649923666451292739220724408939256384041734195258712185803214291600745205302216595592860066245980977228740963745401096581977857948848371085635802444878878658375061266623770906368058416751175458193330505719053287199439438601699247162602814750041192576881095436662487737016"),
    ("1000000", "-0.34999350217129295211765248678077146906140660532871627385705905464464122639545050506566689766889400811273316905679106496957094176628063157624091537721326400854101704415373358406918843870326760701608275471295331038969885668236263111232790694632718291610139597061445121181280871971830473470445049858101244168280285149344319051329076756077247621373011916"),
];

pub const COS: &[(&str, &str)] = &[
    ("0.5", "0.87758256189037271611628158260382965199164519710974405299761086831595076327421394740579418408468225835547840059310905399341382797683328026679975612095022401558762915687859072347693931098961673967701440899764912857021346821838454381839331616880754066081115940348983190805262434229367983882103953443260971069339648047544648581904315236807834735418729900"),
    ("1", "0.54030230586813971740093660744297660373231042061792222767009725538110039477447176451795185608718308934357173116003008909786063376002166345640651226541731858471797116447447949423311792455139325433594351775670289259637573615432754964175449177511513122273010063135707823223677140151746899593667873067422762024507763744067587498161784272021645585111563297"),
    ("3", "-0.98999249660044545727157279473126130239367909661558832881408593292832919751313322042829447935569260217149599311241416918957162928632022968860216854267923487181998624962238918750102662403323599641829172990863918642957643094487719043469800557150234267777061537999045713799044260508809640238555764543144773660106106153314952977753115597937518306184526791"),
    ("-2.75", "-0.92430237863246354409665948952671347821088477239596929426415951570543680785770221311363513487974262337619999991678525346844759073464119416940971485784362598301408675452159962135286556613274149151388726939454828809029146748566872048865612798912521407608263310126474732149692953542036994716442805663333843299931215458240265121595037097314084045776678599"),
    ("10", "-0.83907152907645245225886394782406483451993016513316854683595373104879258686627076840093371276042213892745105440535024362369842337987957751969618636138599016240576199182006400100966550965469041048284459666898038675471697117101052082692130732418341256707226561830110093135614920902814223325290814789712587963413460106057971478089694004611010062472713254"),
    ("100", "0.86231887228768393410193851395084253551008400853551082928016211269272108805092662410309510568427728506713560755516233048110552806801933854109344620694888493101589381654033594033322660640404071140713031362693461456084835935012094553621793549185347052804201912015877548597641586198668157658201586236725323084778293019089407310749466861180205318485594108"),
    ("1000000", "0.93675212753314478693853253507491877570809780421236587972057834111681042133160098200703394087652808410912273005869619830187577164540102644232390407699507090834007542744444759415796655691708123988414601920873545169591842664454854178844174656139574150097091013045753597636862627172328879706473617785548719790141592167764221674109551819804244595324881788"),
];

pub const TAN: &[(&str, &str)] = &[
    ("0.5", "0.54630248984379051325517946578028538329755172017979124616409138593290751051802581571518064827065621858910486260026411426549323009116840284321739092991091421663694074378847426895741040125791175687874599972450891821223775084383916081374829936617341645137771586441314008924018941493144864805865005196743513425749778729084152210854672419703314467905278807"),
    ("1", "1.5574077246549022305069748074583601730872507723815200383839466056988613971517272895550999652022429838046338214117481666133235546181245589376060716845489044392935860431671479080368246132747069555973416406107755352473025067968505070413523851449176214816275700278860224507720140161857721306739416643223690166756717950962610882330224852131148350591629693"),
    ("-2.75", "0.41291789448493248776396687326112912373625582036206288993424940321638849426536196975320046329330580100105071644497161918561797007970095843780622900217070619518322609203549224497615294646806966925167280326737966267734743054996233380810927616614309707202348407698961873641451730358529295444817627125638678134067345419451698937038668742455912320696340033"),
    ("10", "0.64836082745908667125912493300980867681687434298372497563362796739585560037462390087171720629715228615496490827456283238812470577683319955544820674667816840830129284763138332749873429475978601014989908550803245699050701161993219186087178125248089376887105767052268113156144152045503201689723479824910318562021826453983250939137614636439618761402749258"),
];

pub const ATAN: &[(&str, &str)] = &[
    ("0.125", "0.12435499454676143503135484916387102557317019176980408991511411911572226742756675862371059431335333032637905130343837904381116308396839504671224378687171138859102401250904002718788102654925876989000973265906011694932561477352380174653752050574821602248006715464219160658033901853095048722664103400886537294276104206350186542951036116270692506417425223"),
    ("0.5", "0.46364760900080611621425623146121440202853705428612026381093308872019786416574170530060028398488789255652985225119083751350581818162501115547153056994410562071933626616488010153250275598792580551685388916747823728653879391801251719948401395583818511509502163330649387215460973207855555720860146322756524267305218045746400869745058389736389648900264869"),
    ("1", "0.78539816339744830961566084581987572104929234984377645524373614807695410157155224965700870633552926699553702162832057666177346115238764555793133985203212027936257102567548463027638991115573723873259549110720274391648336153211891205844669579131780047728641214173086508715261358166205334840181506228531843114675165157889704372038023024070731352292884109"),
    ("1.5", "0.98279372324732906798571061101466601449687745363162855676142508831798807154979603538970653437281731110816513970201193676622994103918188491367890534724842354941478177267704913183239603977428990205832736038786713359710231437270150517087185712104919981699773549551304469557027841271460065236838762733420624667769008063682821331379951542134380549268078126"),
    ("-2", "-1.1071487177940905030170654601785370400700476454014326466765392074337103389773627940134171286861706414345441910054503158100411041231502799603911491341201349380058057851860891590202770663235486719483370930469272505464279291462253069174093776267974158394778026501552363021506174312455511395950286613430716196204511227003300787433098765840507305568550335"),
    ("10", "1.4711276743037345918528755717617308518553063771832382624719635193438804556955538448934047882367721624115156568478137543539789952382121342030723776319789566558938988279378240515536595105350225967109198439332766642393615499509576705841506254256473427190813389588744580266985990227942120596286601488235354263312295667002702876626809339920673777495758273"),
    ("1000000", "1.5707953267948966195646550249728847754319181758780291008525516612333641915990928783793964781167905797230609517729614869812892487301328712722479242138207576971640950380422616457129571271084521765493958065007868215955562745089701117981574741768335894933075606165561213999985201033053071200852729781603687805889197291036695087621437579780586536494180680"),
];

pub const POW: &[(&str, &str, &str)] = &[
    ("2", "0.5", "1.4142135623730950488016887242096980785696718753769480731766797379907324784621070388503875343276415727350138462309122970249248360558507372126441214970999358314132226659275055927557999505011527820605714701095599716059702745345968620147285174186408891986095523292304843087143214508397626036279952514079896872533965463318088296406206152583523950547457503"),
    ("3", "1.25", "3.9482220388574773824576567053909971654802057706174665301957679757876003855919063991522294507398057945601432270027602640592741422262863226459377915874313533690262230396368758369476451733769610971291190799222160632122256197546332937292317541056458416073426538230863858920268998186063968311194250312539704803980009007538518460528674069304398168302742424"),
    ("0.75", "-3.5", "2.7370679428248925132285571816389094193664083023176385233474480662944126686953877129183544679620718232898783469280500986152611478044427891023196531549145657655752584405369767222802565058387510912367644686417276316496954258183462789829875958063834818870682356331267461530651454891605166896203022326140061339154143282664311270750612390322301563725810723"),
    ("10", "20.5", "3.1622776601683793319988935444327185337195551393252168268575048527925944386392382213442481083793002951873472841528400551485488560304538800146905195967001539033449216571792599406591501534741133394841240853169295770904715764610443692578790620378086099418283717115484063285529991185968245642033269616046913143361289497918902665295436126761787813500613882e20"),
    ("1.5", "100.25", "4.4993390443029526026391689820161721645088512269081207670927161565006283660337045453795227188610816282313186349887215640826845132342094190754994097483368258435404095366087880688482008952108791494575278106866107419434359567525199978809828535526141007623606442679565105500581810592524948653498205831490737762069692141906520622530294003307957230513656535e17"),
];

pub const PI: &str = "3.1415926535897932384626433832795028841971693993751058209749445923078164062862089986280348253421170679821480865132823066470938446095505822317253594081284811174502841027019385211055596446229489549303819644288109756659334461284756482337867831652712019091456485669234603486104543266482133936072602491412737245870066063155881748815209209628292540917153644";

pub const AGM_1_2: &str = "1.4567910310469068691864323832650819749738639432213055907941723832679264545802509002574737128184484443281894018160367999355762430743401245116912132499522793768970211976726893728266666782707432902072384564600963133367494416649516400826932239086263376738382410254887262645136590660408875885100466728130947439789355129117201754471869564160356411130706061";
